// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Measures the speed and magnitude of recent price changes on a 0-100 scale.
//
// Step 1 — Take consecutive close-to-close deltas.
// Step 2 — Seed average gain / average loss with the simple mean of the first
//          `period` deltas (documented seeding rule; affects early values).
// Step 3 — Wilder smoothing for every later delta:
//            avg = (avg * (period - 1) + new) / period
// Step 4 — RS = avg_gain / avg_loss, RSI = 100 - 100 / (1 + RS).
//
// Zero-division cases: a series with gains and no losses pins RSI at 100; a
// series with no movement at all (both averages zero) is neutral, RSI = 50.

/// Compute the RSI series for `closes` with look-back `period`.
///
/// One output per close starting at index `period` — the first `period + 1`
/// closes are consumed producing the seed value. Returns an empty `Vec` when
/// `period` is zero or there are fewer than `period + 1` closes.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || closes.len() < period + 1 {
        return Vec::new();
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let period_f = period as f64;

    // Seed: simple mean of gains / losses over the first `period` deltas.
    let mut avg_gain = deltas[..period].iter().filter(|&&d| d > 0.0).sum::<f64>() / period_f;
    let mut avg_loss = -deltas[..period].iter().filter(|&&d| d < 0.0).sum::<f64>() / period_f;

    let mut series = Vec::with_capacity(deltas.len() - period + 1);
    match rsi_from_averages(avg_gain, avg_loss) {
        Some(rsi) => series.push(rsi),
        None => return Vec::new(),
    }

    for &delta in &deltas[period..] {
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { -delta } else { 0.0 };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        match rsi_from_averages(avg_gain, avg_loss) {
            Some(rsi) => series.push(rsi),
            None => break, // Non-finite — stop producing values.
        }
    }

    series
}

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// Both averages zero => 50.0 (no movement). Loss zero => 100.0 (only gains).
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    let rsi = if avg_loss == 0.0 && avg_gain == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    };

    rsi.is_finite().then_some(rsi)
}
