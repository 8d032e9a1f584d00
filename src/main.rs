use deskline::bootstrap;
use deskline::config::Config;
use deskline::infrastructure::http::router::{build_router, ENDPOINTS};
use deskline::infrastructure::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing and metrics
    let _telemetry = observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Build application state
    let state = bootstrap::build_app_state(&config).await;

    // Build router
    let app = build_router(state, config.max_body_bytes);

    // Start server
    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    for endpoint in ENDPOINTS {
        tracing::info!("  {}", endpoint);
    }
    axum::serve(listener, app).await?;

    Ok(())
}
