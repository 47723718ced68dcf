use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use fashnova::routes::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let api_key = std::env::var("OPENAI_API_KEY").ok();
    if api_key.is_none() {
        // Requests still get served; generation and chat fail per-request
        // with a configuration error until a key is supplied.
        tracing::warn!("OPENAI_API_KEY not set, generation requests will fail");
    }
    let state = AppState::new(api_key);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
