use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shortwave_core::Shortener;
use shortwave_gateway::app::App;
use shortwave_gateway::cli::Cli;
use shortwave_gateway::state::AppState;
use shortwave_generator::RandomIdGenerator;
use shortwave_service::UrlService;
use shortwave_store::{FileStore, MemoryStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // A corrupt store file fails startup here; silently starting empty
    // would mask data loss.
    let shortener: Arc<dyn Shortener> = match &cli.file_storage_path {
        Some(path) => {
            let store = FileStore::open(path)
                .with_context(|| format!("failed to open url store at {}", path.display()))?;
            Arc::new(UrlService::new(
                store,
                RandomIdGenerator::new(),
                cli.base_url.clone(),
            ))
        }
        None => Arc::new(UrlService::new(
            MemoryStore::new(),
            RandomIdGenerator::new(),
            cli.base_url.clone(),
        )),
    };

    let storage = cli
        .file_storage_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "in-memory".to_string());

    let app = App::router(AppState::new(shortener));

    let listener = tokio::net::TcpListener::bind(&cli.server_address)
        .await
        .with_context(|| format!("failed to bind {}", cli.server_address))?;
    info!(
        listen_addr = %listener.local_addr()?,
        base_url = %cli.base_url,
        storage = %storage,
        "starting gateway server"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
