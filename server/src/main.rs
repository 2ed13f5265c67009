//! keygate license verification server.
//!
//! Loads the license table once at startup and answers license checks
//! from bots over HTTP. A missing or malformed license file stops startup.
//!
//! Usage:
//!   keygate-server --port 55555 --licenses licenses.json

use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use keygate_license::LicenseStore;
use keygate_server::build_router;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber, filter::LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "keygate-server")]
#[command(about = "License verification server for bots")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "55555")]
    port: u16,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Path to the license file
    #[arg(short, long, env = "LICENSES_FILE", default_value = "licenses.json")]
    licenses: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let store = LicenseStore::load(&args.licenses).with_context(|| {
        format!("failed to load licenses from {}", args.licenses.display())
    })?;
    info!("Loaded {} licenses from {:?}", store.len(), args.licenses);
    if store.is_empty() {
        warn!("License table is empty, every verification will fail");
    }

    let app = build_router(Arc::new(store));

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr().context("failed to read listen address")?;
    info!("License server listening on {}", local_addr);
    info!("Health check available at http://localhost:{}/health", local_addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("License server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
