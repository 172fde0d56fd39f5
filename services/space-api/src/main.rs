use space_api::{routes::create_router, AppState, Config};
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = Config::from_env()?;

    if config.nasa_key().is_none() {
        tracing::warn!("NASA_API_KEY not configured, image endpoints will serve fallback data");
    }
    if config.hf_key().is_none() {
        tracing::warn!("HF_API_KEY not configured, chat will answer with the canned reply");
    }

    let addr = config.bind_addr();
    let state = AppState::new(config)?;

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    // Peer addresses key the registration rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
