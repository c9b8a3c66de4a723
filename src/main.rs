use anyhow::Context;
use dotenvy::dotenv;
use movie_suggester::{app, config::settings::AppConfig, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::new().context("Invalid configuration")?;
    let port = config.server_port;

    info!("Starting server...");

    let app = app::create_app(AppState::new(config)).await;

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
