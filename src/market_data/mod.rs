// =============================================================================
// Market Data — OHLCV candles fetched from the exchange
// =============================================================================
//
// Each screening run fetches one batch of daily candles per symbol over REST,
// oldest first. The indicator engine consumes the series through the
// `closes` / `volumes` accessors.

/// A single OHLCV candle from the Binance klines endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
}

impl Candle {
    pub fn new(
        open_time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        close_time: i64,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
            close_time,
        }
    }
}

/// Extract the closing prices from an oldest-first candle series.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

/// Extract the volumes from an oldest-first candle series.
pub fn volumes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.volume).collect()
}
