//! DuoKV Server Binary
//!
//! Restores the snapshot, serves TCP clients until a SHUTDOWN command, then
//! writes the snapshot back.

use std::sync::Arc;

use clap::Parser;
use duokv::network::Server;
use duokv::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// DuoKV Server
#[derive(Parser, Debug)]
#[command(name = "duokv-server")]
#[command(about = "Single-node key-value store with scalars and lists")]
#[command(version)]
struct Args {
    /// Snapshot file restored at start and written at shutdown
    #[arg(short, long, default_value = "./duokv_snapshot.json")]
    snapshot: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:6380")]
    listen: String,

    /// Number of connection worker threads
    #[arg(short, long, default_value = "4")]
    workers: usize,

    /// Start empty even if the snapshot exists
    #[arg(long)]
    no_load: bool,

    /// Do not write the snapshot at shutdown
    #[arg(long)]
    no_save: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,duokv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("DuoKV Server v{}", duokv::VERSION);
    tracing::info!("Snapshot file: {}", args.snapshot);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .snapshot_path(&args.snapshot)
        .load_on_open(!args.no_load)
        .save_on_close(!args.no_save)
        .listen_addr(&args.listen)
        .worker_threads(args.workers)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    // Open engine
    let engine = Arc::new(Engine::open(config.clone()));

    tracing::info!(
        scalars = engine.scalar_count(),
        lists = engine.list_count(),
        "Engine initialized successfully"
    );

    // Start server
    let mut server = Server::new(config, Arc::clone(&engine));
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
    drop(server);

    // Workers are joined, so this is the last reference
    match Arc::try_unwrap(engine) {
        Ok(engine) => {
            if let Err(e) = engine.close() {
                tracing::error!("Failed to save snapshot: {}", e);
                std::process::exit(1);
            }
        }
        Err(_) => tracing::error!("Engine still shared at shutdown, snapshot not written"),
    }

    tracing::info!("Server stopped");
}
