//! REST server over an in-memory record store.

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use record_sort::server::{record_router, RecordStore};

/// Serve the record REST interface.
#[derive(Debug, Parser)]
#[command(name = "record-server", version)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "RECORD_SERVER_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;
    let args = Args::parse();
    let app = record_router(RecordStore::new());
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port)).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
