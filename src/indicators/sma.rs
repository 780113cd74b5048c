// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of the most recent `period` values:
//   SMA = (v_1 + v_2 + ... + v_n) / n
//
// Used directly for the 20/50-day trend levels and for the 20-day average
// volume that anchors the volume ratio.

/// Compute the SMA of the most recent `period` values.
///
/// Returns `None` when `period` is zero or there are fewer than `period`
/// values — the caller renders that as "insufficient data" rather than a
/// misleading zero.
pub fn calculate_sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let sum: f64 = values[values.len() - period..].iter().sum();
    let sma = sum / period as f64;

    if sma.is_finite() {
        Some(sma)
    } else {
        None
    }
}
