// =============================================================================
// Console Report — summary table and alerts section
// =============================================================================
//
// All rendering is pure string building so every row is unit-testable; only
// `print_report` touches stdout. Undefined indicators render as "N/A" —
// never a zero that could read as a real value. An unstable MACD signal
// (too little history for a true signal EMA) is marked with a trailing '~'.

use crate::indicators::Macd;
use crate::runner::SymbolOutcome;
use crate::screener::ScreeningResult;

const RULE_WIDTH: usize = 96;

/// Render and print the full report for a completed run.
pub fn print_report(outcomes: &[SymbolOutcome]) {
    println!("{}", render_summary(outcomes));
    println!("{}", render_alerts(outcomes));
}

// -----------------------------------------------------------------------------
// Summary table
// -----------------------------------------------------------------------------

/// Build the summary table: one row per symbol, failed symbols included.
pub fn render_summary(outcomes: &[SymbolOutcome]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("\n{rule}\n  COIN SCREENER SUMMARY\n{rule}\n"));
    out.push_str(&format!(
        "{:<8} {:<14} {:<9} {:<8} {:<10} {:<10} {:<12}\n",
        "Coin", "Price", "24h %", "RSI", "MACD", "Vol Ratio", "Status"
    ));
    out.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

    for outcome in outcomes {
        match outcome {
            SymbolOutcome::Screened(result) => out.push_str(&summary_row(result)),
            SymbolOutcome::Failed { symbol, .. } => {
                out.push_str(&format!(
                    "{:<8} {:<14} {:<9} {:<8} {:<10} {:<10} {:<12}\n",
                    symbol, "N/A", "N/A", "N/A", "N/A", "N/A", "Failed"
                ));
            }
        }
    }

    out.push_str(&rule);
    out
}

fn summary_row(result: &ScreeningResult) -> String {
    format!(
        "{:<8} {:<14} {:<9} {:<8} {:<10} {:<10} {:<12}\n",
        result.symbol,
        format_price(result.price),
        format_pct(result.change_24h_pct),
        format_rsi(result.snapshot.rsi14),
        format_macd(result.snapshot.macd.as_ref()),
        format_ratio(result.snapshot.volume_ratio),
        result.status.to_string(),
    )
}

// -----------------------------------------------------------------------------
// Alerts section
// -----------------------------------------------------------------------------

/// Build the alerts section: only symbols with a non-empty tag set, plus the
/// failures so they are not silently dropped.
pub fn render_alerts(outcomes: &[SymbolOutcome]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("\n{rule}\n  ALERTS - COINS MATCHING SCREENING CONDITIONS\n{rule}\n"));

    let mut any = false;
    for outcome in outcomes {
        match outcome {
            SymbolOutcome::Screened(result) if !result.alerts.is_empty() => {
                any = true;
                out.push_str(&format!(
                    "\n{} ({}, {}, RSI: {})\n",
                    result.symbol,
                    format_price(result.price),
                    format_pct(result.change_24h_pct),
                    format_rsi(result.snapshot.rsi14),
                ));
                for tag in &result.alerts {
                    out.push_str(&format!("  -> {tag}\n"));
                }
            }
            SymbolOutcome::Failed { symbol, reason } => {
                any = true;
                out.push_str(&format!("\n{symbol}: screening failed — {reason}\n"));
            }
            _ => {}
        }
    }

    if !any {
        out.push_str("\nNo coins matching screening conditions at this time.\n");
    }

    out.push_str(&format!("\n{rule}"));
    out
}

// -----------------------------------------------------------------------------
// Field formatting
// -----------------------------------------------------------------------------

/// Humanised price: thousands separators above $1000, two decimals above $1,
/// four decimals for sub-dollar coins.
pub fn format_price(price: f64) -> String {
    if price >= 1_000.0 {
        format!("${}", with_thousands(price))
    } else if price >= 1.0 {
        format!("${price:.2}")
    } else {
        format!("${price:.4}")
    }
}

fn format_pct(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{p:+.2}%"),
        None => "N/A".to_string(),
    }
}

fn format_rsi(rsi: Option<f64>) -> String {
    match rsi {
        Some(r) => format!("{r:.1}"),
        None => "N/A".to_string(),
    }
}

fn format_macd(macd: Option<&Macd>) -> String {
    match macd {
        Some(m) if m.stable => m.trend.to_string(),
        Some(m) => format!("{}~", m.trend),
        None => "N/A".to_string(),
    }
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{r:.2}x"),
        None => "N/A".to_string(),
    }
}

/// Format with two decimals and comma-grouped integer digits.
fn with_thousands(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    format!("{grouped}.{frac_part}")
}
