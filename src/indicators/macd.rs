// =============================================================================
// Moving Average Convergence Divergence — MACD(12, 26, 9)
// =============================================================================
//
// line      = EMA(fast) - EMA(slow), evaluated point-by-point once both EMAs
//             exist (from close index `slow - 1` on)
// signal    = EMA(signal_period) of the line series
// histogram = line - signal
// trend     = Bullish when line > signal, otherwise Bearish
//
// Below `slow` closes there is nothing to compute. Between `slow` and
// `slow + signal_period` closes the line exists but there are too few points
// for a true signal EMA; rather than fail, the signal falls back to the
// simple mean of the available line points and the result is flagged
// `stable = false` so consumers can caveat it.

use crate::indicators::ema::calculate_ema;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Direction of the MACD line relative to its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdTrend {
    Bullish,
    Bearish,
}

impl std::fmt::Display for MacdTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Bearish => write!(f, "Bearish"),
        }
    }
}

/// The most recent MACD reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macd {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
    pub trend: MacdTrend,
    /// False when fewer than `slow + signal_period` closes backed the signal
    /// line (best-effort value, degraded accuracy).
    pub stable: bool,
}

/// Compute MACD(12, 26, 9) for `closes`.
///
/// Returns `None` below 26 closes (the absolute floor) or when the EMA chain
/// breaks on non-finite input.
pub fn calculate_macd(closes: &[f64]) -> Option<Macd> {
    if closes.len() < MACD_SLOW {
        return None;
    }

    let fast = calculate_ema(closes, MACD_FAST);
    let slow = calculate_ema(closes, MACD_SLOW);
    if slow.is_empty() {
        return None;
    }

    // Align the two EMA series on close index: the fast series starts
    // `slow - fast` entries earlier than the slow one.
    let offset = MACD_SLOW - MACD_FAST;
    if fast.len() < slow.len() + offset {
        return None; // Fast EMA terminated early on non-finite input.
    }

    let line_series: Vec<f64> = slow
        .iter()
        .enumerate()
        .map(|(j, &s)| fast[j + offset] - s)
        .collect();

    let line = *line_series.last()?;

    let (signal, stable) = if line_series.len() >= MACD_SIGNAL {
        let signal = *calculate_ema(&line_series, MACD_SIGNAL).last()?;
        (signal, closes.len() >= MACD_SLOW + MACD_SIGNAL)
    } else {
        // Best-effort: simple mean of what exists.
        let mean = line_series.iter().sum::<f64>() / line_series.len() as f64;
        (mean, false)
    };

    if !signal.is_finite() {
        return None;
    }

    let trend = if line > signal {
        MacdTrend::Bullish
    } else {
        MacdTrend::Bearish
    };

    Some(Macd {
        line,
        signal,
        histogram: line - signal,
        trend,
        stable,
    })
}
