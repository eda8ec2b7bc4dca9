//! clash-merge
//!
//! Aggregates proxies from local config files, subscription links or a
//! conversion backend into one proxy-client configuration document, then
//! writes it to disk or serves it over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!   -f files ──────────────────────────────────────┐
//!                                                  │
//!   -u urls ──┬─▶ subscription::fetcher ─▶ decoder ─▶ record ─┐
//!             │                                               ▼
//!             └─▶ document::sources::RemoteConverter ─▶ document::builder
//!                  (when -s is set)                           │
//!                                                             ▼
//!                                              ┌──── ClashDocument ────┐
//!                                              ▼                       ▼
//!                                        -o output file        -p http::server
//! ```

use clap::Parser;

use clash_merge::cli::Cli;
use clash_merge::lifecycle;
use clash_merge::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    tracing::info!("clash-merge v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = lifecycle::run(config).await {
        tracing::error!(error = %e, "Run aborted");
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
