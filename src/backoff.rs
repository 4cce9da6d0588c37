//! Delay selection between rate-limited attempts.

use std::sync::OnceLock;

use regex::Regex;

fn retry_hint_regex() -> &'static Regex {
    static RETRY_HINT: OnceLock<Regex> = OnceLock::new();
    RETRY_HINT.get_or_init(|| {
        Regex::new(r"retry in ([\d.]+)s").expect("retry hint pattern must compile")
    })
}

/// Picks the wait before the attempt following `attempt` (0-indexed).
///
/// A server hint of the form `retry in 5.5s` inside `message` wins;
/// otherwise the delay is `initial_delay_ms * 2^attempt`.
pub fn compute_delay(attempt: usize, initial_delay_ms: u64, message: Option<&str>) -> u64 {
    message
        .and_then(parse_retry_hint)
        .unwrap_or_else(|| exponential_delay(attempt, initial_delay_ms))
}

/// Extracts a server-suggested wait, in milliseconds, from an error message.
///
/// Takes the leftmost `retry in <seconds>s`, where `<seconds>` is a run of
/// digits and dots, reads the longest number at its start (`1.2.3` is
/// `1.2`) and rounds up to whole milliseconds.
pub fn parse_retry_hint(message: &str) -> Option<u64> {
    let captures = retry_hint_regex().captures(message)?;
    let seconds = leading_number(captures.get(1)?.as_str())?;
    // float-to-int casts saturate
    Some((seconds * 1000.0).ceil() as u64)
}

/// Parses the longest `digits[.digits]` prefix; `None` when it has no digit.
fn leading_number(text: &str) -> Option<f64> {
    let mut seen_dot = false;
    let mut seen_digit = false;
    let mut end = 0;
    for (index, c) in text.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = index + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}

fn exponential_delay(attempt: usize, initial_delay_ms: u64) -> u64 {
    let exp = attempt.min(63) as u32;
    initial_delay_ms.saturating_mul(1u64 << exp)
}

#[cfg(test)]
mod tests {
    use super::{compute_delay, parse_retry_hint};

    #[test]
    fn exponential_delay_doubles_per_attempt() {
        assert_eq!(compute_delay(0, 1000, None), 1000);
        assert_eq!(compute_delay(1, 1000, None), 2000);
        assert_eq!(compute_delay(2, 1000, None), 4000);
        assert_eq!(compute_delay(3, 250, Some("quota exceeded")), 2000);
    }

    #[test]
    fn exponential_delay_saturates_instead_of_overflowing() {
        assert_eq!(compute_delay(200, 1000, None), u64::MAX);
        assert_eq!(compute_delay(70, 0, None), 0);
    }

    #[test]
    fn server_hint_overrides_exponential_value() {
        assert_eq!(
            compute_delay(0, 1000, Some("Quota exceeded. Please retry in 5.5s.")),
            5500
        );
        assert_eq!(compute_delay(4, 1000, Some("retry in 2s")), 2000);
    }

    #[test]
    fn hint_rounds_up_to_whole_milliseconds() {
        assert_eq!(parse_retry_hint("Please retry in 56.123456789s."), Some(56_124));
        assert_eq!(parse_retry_hint("retry in 0.0001s"), Some(1));
        assert_eq!(parse_retry_hint("retry in 0s"), Some(0));
    }

    #[test]
    fn malformed_hint_falls_back_to_exponential() {
        assert_eq!(parse_retry_hint("retry in a few seconds"), None);
        assert_eq!(parse_retry_hint("retry in 5 s"), None);
        assert_eq!(parse_retry_hint("retry in 5ms"), None);
        assert_eq!(parse_retry_hint("retry in .s"), None);
        assert_eq!(parse_retry_hint("retry in ..s"), None);
        assert_eq!(compute_delay(1, 1000, Some("retry in soon")), 2000);
    }

    #[test]
    fn hint_reads_longest_leading_number() {
        assert_eq!(compute_delay(1, 1000, Some("Please retry in 1.2.3s")), 1200);
        assert_eq!(parse_retry_hint("retry in .5s"), Some(500));
        assert_eq!(parse_retry_hint("retry in 7.s"), Some(7000));
    }

    #[test]
    fn skips_non_matching_occurrences() {
        assert_eq!(
            parse_retry_hint("do not retry in a loop; retry in 3s instead"),
            Some(3000)
        );
    }
}
