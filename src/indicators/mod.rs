// =============================================================================
// Technical Indicators
// =============================================================================
//
// Pure, side-effect-free indicator math. Every public entry point reports
// insufficient history as an absent value (`Option` / empty `Vec`) instead of
// an error, so a short series degrades to "N/A" fields rather than a failed
// symbol.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod volume;

use crate::market_data::{self, Candle};

pub use macd::{Macd, MacdTrend};

/// Short trend-level look-back (closes).
pub const SMA_SHORT: usize = 20;
/// Long trend-level look-back (closes).
pub const SMA_LONG: usize = 50;
/// RSI look-back (deltas).
pub const RSI_PERIOD: usize = 14;

/// Direction of the RSI relative to one candle earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiTrend {
    Up,
    Down,
    Flat,
}

/// All derived values for one symbol at one point in time.
///
/// Computed once per symbol per run and never mutated. A `None` field means
/// the series was too short for that indicator's look-back.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub rsi14: Option<f64>,
    pub macd: Option<Macd>,
    pub volume_ratio: Option<f64>,
}

/// Compute the full indicator snapshot from an oldest-first candle series.
///
/// Never fails: each field independently falls back to `None` below its
/// minimum look-back. Deterministic — the same series always produces
/// bit-identical values.
pub fn compute(candles: &[Candle]) -> IndicatorSnapshot {
    let closes = market_data::closes(candles);
    let volumes = market_data::volumes(candles);

    IndicatorSnapshot {
        sma20: sma::calculate_sma(&closes, SMA_SHORT),
        sma50: sma::calculate_sma(&closes, SMA_LONG),
        rsi14: rsi::calculate_rsi(&closes, RSI_PERIOD).last().copied(),
        macd: macd::calculate_macd(&closes),
        volume_ratio: volume::volume_ratio(&volumes),
    }
}

/// Compare the current RSI with the RSI computed one candle earlier.
///
/// Returns `None` when either reading is undefined (fewer than
/// `RSI_PERIOD + 2` closes) — downstream conditions must then stay silent
/// rather than guess.
pub fn rsi_trend(closes: &[f64]) -> Option<RsiTrend> {
    let current = *rsi::calculate_rsi(closes, RSI_PERIOD).last()?;
    let previous = *rsi::calculate_rsi(&closes[..closes.len() - 1], RSI_PERIOD).last()?;

    if current > previous {
        Some(RsiTrend::Up)
    } else if current < previous {
        Some(RsiTrend::Down)
    } else {
        Some(RsiTrend::Flat)
    }
}
