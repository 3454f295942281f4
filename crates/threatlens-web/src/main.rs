//! ThreatLens Web Server
//!
//! Run with: cargo run -p threatlens-web

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = threatlens_common::config::Config::load()?;
    info!(model = %config.model.base_url, "Starting ThreatLens Web Server...");

    let state = threatlens_web::state::AppState::new(&config);
    let app = threatlens_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.web.bind_addr).await?;
    info!("Dashboard listening on http://{}", config.web.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
