use clap::Parser;
use std::net::Ipv4Addr;
use std::sync::Arc;

use glean::api::{self, AppState};
use glean::fetcher::HttpBackend;
use glean::query::QueryLimits;

#[derive(Parser, Debug)]
#[command(name = "glean", about = "Paginated search query service")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();

    let backend = HttpBackend::from_config()?;
    let state = AppState {
        backend: Arc::new(backend),
        limits: QueryLimits::from_config(),
    };
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, args.port)).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
