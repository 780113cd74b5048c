// =============================================================================
// Pulse Screener — Main Entry Point
// =============================================================================
//
// Single-shot multi-coin screener: fetch daily history per symbol from the
// Binance public API, compute indicators, classify against the screening
// conditions, print the summary table and alerts, exit.
//
// Exit code: 0 after a completed run (even if individual symbols failed);
// non-zero only when the exchange is unreachable before the run starts.
// =============================================================================

mod binance;
mod config;
mod indicators;
mod market_data;
mod report;
mod runner;
mod screener;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::runner::SymbolOutcome;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let symbols = config::resolve_symbols();
    let started = chrono::Local::now();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║        Pulse Screener — Multi-Coin Analysis              ║");
    info!("╚══════════════════════════════════════════════════════════╝");
    info!(symbols = ?symbols, started = %started.format("%Y-%m-%d %H:%M:%S"), "run starting");

    let client = binance::BinanceClient::new()?;

    // Unrecoverable path: if the exchange cannot be reached at all, there is
    // nothing to screen and the run aborts with a non-zero exit.
    client
        .ping()
        .await
        .context("cannot reach Binance — aborting run")?;

    let outcomes = runner::run(&client, &symbols).await;

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, SymbolOutcome::Failed { .. }))
        .count();
    if failed > 0 {
        warn!(failed, total = outcomes.len(), "some symbols could not be screened");
    }

    report::print_report(&outcomes);

    info!(
        total = outcomes.len(),
        failed,
        used_weight = client.used_weight(),
        finished = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "run complete"
    );

    Ok(())
}
