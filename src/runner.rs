// =============================================================================
// Run Orchestrator
// =============================================================================
//
// Strictly sequential: fetch -> compute -> classify per symbol, with every
// per-symbol failure caught and recorded so the remaining symbols still run.
// A fixed delay between symbols keeps the request rate polite; it has no
// correctness role.

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::binance::{BinanceClient, Ticker24h};
use crate::config;
use crate::indicators;
use crate::market_data::{self, Candle};
use crate::screener::{self, ScreeningResult};

/// Outcome of screening one symbol. Failures are data for the report, not
/// errors for the caller.
#[derive(Debug)]
pub enum SymbolOutcome {
    Screened(ScreeningResult),
    Failed { symbol: String, reason: String },
}

/// Screen every base asset in order, isolating per-symbol failures.
pub async fn run(client: &BinanceClient, bases: &[String]) -> Vec<SymbolOutcome> {
    let mut outcomes = Vec::with_capacity(bases.len());

    for (i, base) in bases.iter().enumerate() {
        info!(symbol = %base, index = i + 1, total = bases.len(), "screening");

        let outcome = match screen_symbol(client, base).await {
            Ok(result) => SymbolOutcome::Screened(result),
            Err(e) => {
                warn!(symbol = %base, error = %e, "symbol failed — continuing");
                SymbolOutcome::Failed {
                    symbol: base.clone(),
                    reason: format!("{e:#}"),
                }
            }
        };
        outcomes.push(outcome);

        // Rate-policy delay between symbols (not after the last one).
        if i + 1 < bases.len() {
            tokio::time::sleep(std::time::Duration::from_millis(config::REQUEST_DELAY_MS)).await;
        }
    }

    outcomes
}

/// Fetch and analyze a single symbol. Any error here is a per-symbol failure.
async fn screen_symbol(client: &BinanceClient, base: &str) -> Result<ScreeningResult> {
    let pair = config::pair_symbol(base);

    let ticker = client
        .get_ticker_24h(&pair)
        .await
        .with_context(|| format!("ticker fetch failed for {pair}"))?;

    let candles = client
        .get_klines(&pair, config::CANDLE_INTERVAL, config::KLINE_LIMIT)
        .await
        .with_context(|| format!("kline fetch failed for {pair}"))?;

    analyze(base, &ticker, &candles)
}

/// Pure analysis step: indicators + classification over fetched data.
fn analyze(base: &str, ticker: &Ticker24h, candles: &[Candle]) -> Result<ScreeningResult> {
    if candles.len() < config::MIN_CANDLES {
        anyhow::bail!(
            "insufficient history: {} candles, need {}",
            candles.len(),
            config::MIN_CANDLES
        );
    }

    let snapshot = indicators::compute(candles);
    let closes = market_data::closes(candles);
    let rsi_trend = indicators::rsi_trend(&closes);

    Ok(screener::classify(
        base,
        ticker.last_price,
        ticker.change_pct,
        snapshot,
        rsi_trend,
    ))
}
