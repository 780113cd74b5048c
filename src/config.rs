// =============================================================================
// Screener Configuration — process-wide constants
// =============================================================================
//
// Everything here is fixed for a run: the screening thresholds live next to
// the conditions they gate (`screener.rs`), and the only runtime override is
// the symbol list via the SCREENER_SYMBOLS environment variable.

/// Quote asset every screened pair trades against.
pub const QUOTE_ASSET: &str = "USDT";

/// Candle interval used for all indicators (daily).
pub const CANDLE_INTERVAL: &str = "1d";

/// Number of candles requested per symbol. 60 gives the MACD signal line
/// comfortable headroom over its 35-candle stability floor.
pub const KLINE_LIMIT: u32 = 60;

/// Minimum candles a symbol must return to be screened at all.
pub const MIN_CANDLES: usize = 50;

/// Delay between per-symbol request batches, purely to respect the
/// exchange's request-rate policy.
pub const REQUEST_DELAY_MS: u64 = 500;

/// Base assets screened by default, each quoted against [`QUOTE_ASSET`].
pub const DEFAULT_SYMBOLS: [&str; 10] = [
    "BTC", "ETH", "SOL", "XRP", "HYPE", "AAVE", "PUMP", "STABLE", "ENA", "BNB",
];

/// Resolve the list of base assets to screen: the SCREENER_SYMBOLS env var
/// (comma-separated) when set and non-empty, otherwise the built-in list.
pub fn resolve_symbols() -> Vec<String> {
    if let Ok(raw) = std::env::var("SCREENER_SYMBOLS") {
        let symbols: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        if !symbols.is_empty() {
            return symbols;
        }
    }
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Exchange pair name for a base asset, e.g. "BTC" -> "BTCUSDT".
pub fn pair_symbol(base: &str) -> String {
    format!("{base}{QUOTE_ASSET}")
}
