// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// Weights recent values more heavily than the SMA:
//   multiplier = 2 / (period + 1)
//   EMA_t      = value_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// Seeding rule (this matters for early-series values and is relied on by the
// MACD tests): the first EMA value is the simple average of the first
// `period` inputs. Every later input produces one more output, so the series
// has one element per input starting at index `period - 1`.

/// Compute the EMA series for `values` with look-back `period`.
///
/// Returns an empty `Vec` when `period` is zero or the input is shorter than
/// `period`. Stops early if the recurrence produces a non-finite value.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;

    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    if !seed.is_finite() {
        return Vec::new();
    }

    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);

    let mut prev = seed;
    for &v in &values[period..] {
        let ema = v * multiplier + prev * (1.0 - multiplier);
        if !ema.is_finite() {
            break;
        }
        series.push(ema);
        prev = ema;
    }

    series
}
