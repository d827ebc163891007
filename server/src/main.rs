mod config;
mod routes;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("HTTP client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Router(String),
    #[error("listener failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "chirp server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(upstream = %config.upstream, "forwarding API traffic");

    let state = state::AppState::new(config)?;
    let app = routes::app(state).map_err(StartupError::Router)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "chirp listening");
    axum::serve(listener, app).await?;
    Ok(())
}
