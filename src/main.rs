mod application;
mod domain;
mod infrastructure;
mod presentation;

use tracing_subscriber::EnvFilter;

use crate::infrastructure::AppContainer;
use crate::presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let container = AppContainer::new().await?;

    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok());

    let server = HttpServer::new(
        container.file_handler.clone(),
        container.search_handler.clone(),
        container.subject_handler.clone(),
        container.health_handler.clone(),
        container.background_processor.clone(),
        port,
    );

    server.run().await
}
