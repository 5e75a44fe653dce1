use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Exposes the in-memory shopping list over HTTP.
/// - config/: Application configuration (server, CORS, shopping list)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (a .env file may also set RUST_LOG)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.shopping_list)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
