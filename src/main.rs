//! HTTP entry point for the curse-maven service.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use curse_maven::metadata::CurseForgeClient;
use curse_maven::server::{AppState, build_router};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");

    let metadata = Arc::new(CurseForgeClient::with_api_base(&args.api_base));
    let state = AppState::new(metadata, &args.cdn_base);
    let app = build_router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, api_base = %args.api_base, "curse-maven repository listening");

    axum::serve(listener, app).await?;
    Ok(())
}
