use anyhow::{Context, Result};
use review_recommender::{LlmClient, LlmConfig, Recommender, ReviewRecord};
use tracing::error;
use tracing_subscriber::EnvFilter;

const SAMPLE_REVIEW: &str = include_str!("../demos/sample_review.json");

/// Routes panics through the tracing subscriber so they land on stderr with
/// the rest of the diagnostics.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        error!("recommender panicked at {location}: {info}");
    }));
}

fn load_review(path: Option<String>) -> Result<ReviewRecord> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read review file: {path}"))?;
            ReviewRecord::from_json_str(&raw)
                .with_context(|| format!("Invalid review record in {path}"))
        }
        None => ReviewRecord::from_json_str(SAMPLE_REVIEW).context("Invalid bundled sample review"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    // Keep stdout for the recommendation line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    install_panic_hook();

    let config = LlmConfig::from_env().context("Failed to load completion service settings")?;
    let review = load_review(std::env::args().nth(1))?;

    let client = LlmClient::new(config)?;
    let recommender = Recommender::new(client)?;
    let recommendation = recommender.generate_recommendation(&review).await?;

    println!("Recommended Product: {}", recommendation.text());

    Ok(())
}
