use tracing_subscriber::EnvFilter;

use canine::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let app = canine::server::app()?;

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %config.addr(), "canine listening");
    axum::serve(listener, app).await?;
    Ok(())
}
