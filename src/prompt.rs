//! Instruction text sent alongside the resume.

/// Avatar used when no GitHub or LinkedIn profile picture can be resolved.
pub const FALLBACK_AVATAR_URL: &str =
    "https://unsplash.com/illustrations/a-drawing-of-a-man-wearing-a-tie-7EbR-jFH7cI";

const TAILWIND_SCRIPT: &str =
    r#"<script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>"#;

/// Builds the full generation input: the resume followed by page instructions.
pub fn portfolio_prompt(resume: &str) -> String {
    format!(
        "{resume}\n\n\
         Read the resume above and write the code for a modern-looking personal portfolio web page.\n\
         - Output one self-contained HTML file with inline JavaScript. No markdown fences, and no \
         commentary before or after the page.\n\
         - Style it with Tailwind CSS loaded from {TAILWIND_SCRIPT} and pick a consistent theme.\n\
         - Use the Font Awesome CDN for icons and Unsplash for the main images (avatar or vector \
         art). Never invent URLs or use links that may be broken.\n\
         - Include About Me, Skills, Projects and Contact Information sections, and make sure the \
         navbar links work.\n\
         - If the resume mentions a GitHub or LinkedIn profile, load the profile picture through \
         that site's public API using the user id and show it. When it is unclear whether an id is \
         a GitHub username, a LinkedIn id or an email, try GitHub first, then the others, and fall \
         back to {FALLBACK_AVATAR_URL}.\n\
         - When a GitHub profile is found, reuse its username for the GitHub link on the page.\n\
         - Use semantic HTML tags and keep the code clearly structured.\n\
         Reply with the code only."
    )
}
