pub mod api;
pub mod config;
pub mod pipeline;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiContext, ServerError};
use crate::config::{ConfigError, TriageConfig};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Run the SehatLink API until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = TriageConfig::from_env()?;
    if !settings.ai_enabled() {
        tracing::warn!("GEMINI_API_KEY not set, every request uses the rule-based fallback");
    }
    tracing::info!(
        models = settings.models.len(),
        timeout_secs = settings.ai_timeout.map(|t| t.as_secs()),
        "Triage configured"
    );

    let ctx = ApiContext::from_config(&settings);
    let mut server = api::start_server(ctx, settings.bind_addr).await?;

    let exited_early = tokio::select! {
        result = server.wait() => Some(result),
        _ = shutdown_signal() => None,
    };

    match exited_early {
        Some(result) => result?,
        None => {
            server.shutdown();
            server.wait().await?;
        }
    }

    tracing::info!("{} stopped", config::APP_NAME);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Ctrl-C received");
}
