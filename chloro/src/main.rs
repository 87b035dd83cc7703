//! Chloro dashboard server
//!
//! Runs the Chlorophylle x GDMP page as a standalone development server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chloro::{server, Chloro, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first so the debug flag can pick the log filter
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(debug = config.debug, "Starting Chloro dashboard...");

    let page = Chloro::new(None);
    server::serve(page.app().clone(), &config).await?;

    Ok(())
}
