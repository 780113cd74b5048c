// =============================================================================
// Volume Ratio — current period vs 20-period average
// =============================================================================
//
// ratio = volume of the latest candle / mean volume of the 20 candles
//         immediately preceding it
//
// Convention: the current period is EXCLUDED from the average, so a spike in
// the latest candle cannot dilute its own baseline. This means at least 21
// periods are required.

use crate::indicators::sma::calculate_sma;

/// Number of trailing periods that form the baseline average.
pub const VOLUME_LOOKBACK: usize = 20;

/// Compute the volume ratio for an oldest-first volume series.
///
/// Returns `None` when fewer than `VOLUME_LOOKBACK + 1` periods exist or the
/// trailing average is zero.
pub fn volume_ratio(volumes: &[f64]) -> Option<f64> {
    if volumes.len() < VOLUME_LOOKBACK + 1 {
        return None;
    }

    let current = *volumes.last()?;
    let baseline = calculate_sma(&volumes[..volumes.len() - 1], VOLUME_LOOKBACK)?;
    if baseline <= 0.0 {
        return None;
    }

    let ratio = current / baseline;
    ratio.is_finite().then_some(ratio)
}
