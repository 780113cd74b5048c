// =============================================================================
// Binance REST API Client — public market-data endpoints
// =============================================================================
//
// The screener only reads public data, so no API key or request signing is
// involved. Three endpoints are used:
//   GET /api/v3/ping        — connectivity probe before the run
//   GET /api/v3/ticker/24hr — last price and 24h percentage change
//   GET /api/v3/klines      — daily OHLCV history (array-of-arrays format)
// =============================================================================

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::binance::rate_limit::RateLimitTracker;
use crate::market_data::Candle;

/// 24-hour rolling ticker statistics for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker24h {
    pub last_price: f64,
    /// Missing or malformed percentage fields degrade to `None` rather than
    /// failing the symbol.
    pub change_pct: Option<f64>,
}

/// Binance public REST client.
pub struct BinanceClient {
    base_url: String,
    client: reqwest::Client,
    rate_limit: RateLimitTracker,
}

impl BinanceClient {
    /// Create a client against the production endpoint. `BINANCE_BASE_URL`
    /// overrides the host (useful against mirrors).
    pub fn new() -> Result<Self> {
        let base_url = std::env::var("BINANCE_BASE_URL")
            .unwrap_or_else(|_| "https://api.binance.com".to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;

        debug!(%base_url, "BinanceClient initialised");

        Ok(Self {
            base_url,
            client,
            rate_limit: RateLimitTracker::new(),
        })
    }

    /// GET /api/v3/ping — returns Ok only when the exchange is reachable.
    ///
    /// Called once before the run; a failure here is the unrecoverable case
    /// and aborts the program.
    #[instrument(skip(self), name = "binance::ping")]
    pub async fn ping(&self) -> Result<()> {
        let url = format!("{}/api/v3/ping", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET /api/v3/ping request failed")?;

        self.rate_limit.update_from_headers(resp.headers());

        if !resp.status().is_success() {
            anyhow::bail!("Binance GET /api/v3/ping returned {}", resp.status());
        }

        debug!("exchange reachable");
        Ok(())
    }

    /// GET /api/v3/ticker/24hr for a single symbol.
    #[instrument(skip(self), name = "binance::get_ticker_24h")]
    pub async fn get_ticker_24h(&self, symbol: &str) -> Result<Ticker24h> {
        let url = format!("{}/api/v3/ticker/24hr?symbol={}", self.base_url, symbol);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET /api/v3/ticker/24hr request failed")?;

        self.rate_limit.update_from_headers(resp.headers());

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse ticker response")?;

        if !status.is_success() {
            anyhow::bail!("Binance GET /api/v3/ticker/24hr returned {status}: {body}");
        }

        let ticker = parse_ticker_24h(&body)?;
        debug!(symbol, price = ticker.last_price, "ticker fetched");
        Ok(ticker)
    }

    /// GET /api/v3/klines — oldest-first OHLCV candles.
    #[instrument(skip(self), name = "binance::get_klines")]
    pub async fn get_klines(&self, symbol: &str, interval: &str, limit: u32) -> Result<Vec<Candle>> {
        let url = format!(
            "{}/api/v3/klines?symbol={}&interval={}&limit={}",
            self.base_url, symbol, interval, limit
        );

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("GET /api/v3/klines request failed")?;

        self.rate_limit.update_from_headers(resp.headers());

        let status = resp.status();
        let body: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse klines response")?;

        if !status.is_success() {
            anyhow::bail!("Binance GET /api/v3/klines returned {status}: {body}");
        }

        let candles = parse_klines(&body)?;
        debug!(symbol, interval, count = candles.len(), "klines fetched");
        Ok(candles)
    }

    /// Most recent exchange-reported request weight (for the run summary).
    pub fn used_weight(&self) -> u32 {
        self.rate_limit.used_weight()
    }
}

impl std::fmt::Debug for BinanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// =============================================================================
// Response parsing (pure — exercised directly by the tests)
// =============================================================================

/// Parse a /api/v3/ticker/24hr payload.
fn parse_ticker_24h(body: &serde_json::Value) -> Result<Ticker24h> {
    let last_price = body
        .get("lastPrice")
        .map(parse_str_f64)
        .transpose()?
        .context("ticker response missing 'lastPrice'")?;

    let change_pct = body
        .get("priceChangePercent")
        .and_then(|v| parse_str_f64(v).ok());

    Ok(Ticker24h {
        last_price,
        change_pct,
    })
}

/// Parse a /api/v3/klines payload.
///
/// Array indices per entry:
///   [0] openTime, [1] open, [2] high, [3] low, [4] close, [5] volume,
///   [6] closeTime, ... (quote volume and trade counts are unused here)
fn parse_klines(body: &serde_json::Value) -> Result<Vec<Candle>> {
    let raw = body.as_array().context("klines response is not an array")?;

    let mut candles = Vec::with_capacity(raw.len());
    for entry in raw {
        let arr = entry.as_array().context("kline entry is not an array")?;
        if arr.len() < 7 {
            anyhow::bail!("kline entry has {} elements, expected at least 7", arr.len());
        }

        candles.push(Candle::new(
            arr[0].as_i64().context("kline openTime is not an integer")?,
            parse_str_f64(&arr[1])?,
            parse_str_f64(&arr[2])?,
            parse_str_f64(&arr[3])?,
            parse_str_f64(&arr[4])?,
            parse_str_f64(&arr[5])?,
            arr[6].as_i64().context("kline closeTime is not an integer")?,
        ));
    }

    Ok(candles)
}

/// Parse a JSON value that may be either a string or a number into `f64`.
/// Binance renders all decimal fields as strings.
fn parse_str_f64(val: &serde_json::Value) -> Result<f64> {
    if let Some(s) = val.as_str() {
        s.parse::<f64>()
            .with_context(|| format!("failed to parse '{s}' as f64"))
    } else if let Some(n) = val.as_f64() {
        Ok(n)
    } else {
        anyhow::bail!("expected string or number, got: {val}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_ticker_payload() {
        let body = json!({
            "symbol": "BTCUSDT",
            "lastPrice": "64250.10",
            "priceChangePercent": "-1.234",
            "quoteVolume": "123456789.00"
        });
        let ticker = parse_ticker_24h(&body).unwrap();
        assert!((ticker.last_price - 64250.10).abs() < 1e-9);
        assert!((ticker.change_pct.unwrap() + 1.234).abs() < 1e-9);
    }

    #[test]
    fn ticker_without_percent_degrades_to_none() {
        let body = json!({ "lastPrice": "2.5" });
        let ticker = parse_ticker_24h(&body).unwrap();
        assert_eq!(ticker.change_pct, None);
    }

    #[test]
    fn ticker_without_price_is_an_error() {
        let body = json!({ "priceChangePercent": "0.5" });
        assert!(parse_ticker_24h(&body).is_err());
    }

    #[test]
    fn parses_kline_array() {
        let body = json!([
            [1700000000000i64, "100.0", "110.0", "95.0", "105.0", "5000.0",
             1700086399999i64, "525000.0", 1234, "2500.0", "262500.0", "0"],
            [1700086400000i64, "105.0", "112.0", "101.0", "108.5", "4200.0",
             1700172799999i64, "453600.0", 1100, "2100.0", "226800.0", "0"]
        ]);
        let candles = parse_klines(&body).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].open_time, 1700000000000);
        assert!((candles[0].close - 105.0).abs() < 1e-9);
        assert!((candles[1].volume - 4200.0).abs() < 1e-9);
        assert_eq!(candles[1].close_time, 1700172799999);
    }

    #[test]
    fn numeric_kline_fields_are_accepted() {
        // Some mirrors return plain numbers instead of strings.
        let body = json!([[0i64, 1.0, 2.0, 0.5, 1.5, 10.0, 1i64]]);
        let candles = parse_klines(&body).unwrap();
        assert!((candles[0].high - 2.0).abs() < 1e-9);
    }

    #[test]
    fn short_kline_entry_is_an_error() {
        let body = json!([[0i64, "1.0", "2.0"]]);
        assert!(parse_klines(&body).is_err());
    }

    #[test]
    fn garbage_price_is_an_error() {
        assert!(parse_str_f64(&json!("not-a-number")).is_err());
        assert!(parse_str_f64(&json!(null)).is_err());
        assert!((parse_str_f64(&json!("3.25")).unwrap() - 3.25).abs() < 1e-12);
    }
}
