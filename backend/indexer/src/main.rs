//! Points ledger audit indexer.
//!
//! Follows the ledger contract's event stream over Soroban RPC, records every
//! event in SQLite and serves the audit log over a read-only REST API. The
//! ledger never reads this data back.

mod api;
mod config;
mod db;
mod errors;
mod events;
mod indexer;
mod rpc;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use indexer::IndexerState;

/// Per-request timeout for Soroban RPC calls.
const RPC_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        contract = %config.contract_id,
        rpc = %config.rpc_url,
        database = %config.database_url,
        page_size = config.events_per_page,
        poll_secs = config.poll_interval_secs,
        start_ledger = config.start_ledger,
        "Points ledger indexer configured"
    );

    let pool = db::init_pool(&config.database_url).await?;
    let resume_from = db::get_last_ledger(&pool).await?;
    if resume_from > 0 {
        info!(ledger = resume_from, "Found saved cursor");
    }

    let rpc_client = Client::builder()
        .timeout(Duration::from_secs(RPC_TIMEOUT_SECS))
        .build()?;
    let poller = tokio::spawn(indexer::run(Arc::new(IndexerState {
        pool: pool.clone(),
        config: config.clone(),
        client: rpc_client,
    })));

    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Audit API listening");

    axum::serve(listener, api::router(pool))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Could not listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    poller.abort();
    info!("Indexer stopped");
    Ok(())
}
