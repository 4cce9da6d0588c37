use resume_folio::{GeminiClient, RetryingInvoker};

/// Usage: `cargo run --example generate -- resume.txt > portfolio.html`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: generate <resume.txt>"))?;
    let resume = tokio::fs::read_to_string(&path).await?;

    let gemini = GeminiClient::from_env().map_err(anyhow::Error::msg)?;
    let html = RetryingInvoker::new(gemini)
        .model_from_env()
        .generate_portfolio(&resume)
        .await?;

    println!("{html}");
    Ok(())
}
