// =============================================================================
// Screening Classifier
// =============================================================================
//
// Pure classification of one symbol from its latest price and indicator
// snapshot. No I/O, no hidden state: the tag set is fully determined by the
// inputs, and any indicator that is `None` silently disqualifies every
// condition that needs it.
//
// Conditions:
//   Oversold       RSI < 30
//   Overbought     RSI > 70
//   VolumeSpike    volume ratio > 2.0 (strictly)
//   BullishSetup   price above both trend levels, MACD bullish, RSI in [40,60]
//   BreakdownRisk  price below both trend levels, MACD bearish, RSI falling

use crate::indicators::{IndicatorSnapshot, MacdTrend, RsiTrend};

/// RSI floor below which a coin counts as oversold.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI ceiling above which a coin counts as overbought.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// Volume ratio above which (strictly) a spike is flagged.
pub const VOLUME_SPIKE_RATIO: f64 = 2.0;
/// Inclusive RSI band required for a bullish setup.
pub const BULLISH_RSI_BAND: (f64, f64) = (40.0, 60.0);

/// A screening condition a coin has triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTag {
    Oversold,
    Overbought,
    VolumeSpike,
    BullishSetup,
    BreakdownRisk,
}

impl std::fmt::Display for AlertTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oversold => write!(f, "OVERSOLD"),
            Self::Overbought => write!(f, "OVERBOUGHT"),
            Self::VolumeSpike => write!(f, "VOLUME SPIKE"),
            Self::BullishSetup => write!(f, "BULLISH SETUP"),
            Self::BreakdownRisk => write!(f, "BREAKDOWN RISK"),
        }
    }
}

/// Headline status derived from the RSI thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Oversold,
    Overbought,
    Normal,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Oversold => write!(f, "Oversold"),
            Self::Overbought => write!(f, "Overbought"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}

/// Per-symbol screening record, immutable once built.
#[derive(Debug, Clone)]
pub struct ScreeningResult {
    /// Base asset, e.g. "BTC".
    pub symbol: String,
    /// Latest traded price.
    pub price: f64,
    /// 24-hour percentage change as reported by the ticker.
    pub change_24h_pct: Option<f64>,
    pub snapshot: IndicatorSnapshot,
    pub status: Status,
    pub alerts: Vec<AlertTag>,
}

/// Evaluate the five screening conditions for one symbol.
///
/// Pure function of its arguments. Missing indicators never panic — each
/// condition that depends on an absent value simply evaluates false, and the
/// snapshot is carried through so the report can show "N/A".
pub fn classify(
    symbol: &str,
    price: f64,
    change_24h_pct: Option<f64>,
    snapshot: IndicatorSnapshot,
    rsi_trend: Option<RsiTrend>,
) -> ScreeningResult {
    let mut alerts = Vec::new();

    let rsi = snapshot.rsi14;
    let macd_trend = snapshot.macd.as_ref().map(|m| m.trend);

    if let Some(rsi) = rsi {
        if rsi < RSI_OVERSOLD {
            alerts.push(AlertTag::Oversold);
        }
        if rsi > RSI_OVERBOUGHT {
            alerts.push(AlertTag::Overbought);
        }
    }

    if let Some(ratio) = snapshot.volume_ratio {
        if ratio > VOLUME_SPIKE_RATIO {
            alerts.push(AlertTag::VolumeSpike);
        }
    }

    if let (Some(sma20), Some(sma50), Some(trend), Some(rsi)) =
        (snapshot.sma20, snapshot.sma50, macd_trend, rsi)
    {
        let (lo, hi) = BULLISH_RSI_BAND;
        if price > sma20
            && price > sma50
            && trend == MacdTrend::Bullish
            && (lo..=hi).contains(&rsi)
        {
            alerts.push(AlertTag::BullishSetup);
        }

        if price < sma20
            && price < sma50
            && trend == MacdTrend::Bearish
            && rsi_trend == Some(RsiTrend::Down)
        {
            alerts.push(AlertTag::BreakdownRisk);
        }
    }

    // Oversold wins over Overbought; the RSI thresholds are disjoint so the
    // two cannot actually coexist.
    let status = if alerts.contains(&AlertTag::Oversold) {
        Status::Oversold
    } else if alerts.contains(&AlertTag::Overbought) {
        Status::Overbought
    } else {
        Status::Normal
    };

    ScreeningResult {
        symbol: symbol.to_string(),
        price,
        change_24h_pct,
        snapshot,
        status,
        alerts,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::Macd;

    fn snapshot(
        sma20: Option<f64>,
        sma50: Option<f64>,
        rsi14: Option<f64>,
        trend: Option<MacdTrend>,
        volume_ratio: Option<f64>,
    ) -> IndicatorSnapshot {
        IndicatorSnapshot {
            sma20,
            sma50,
            rsi14,
            macd: trend.map(|t| Macd {
                line: 1.0,
                signal: 0.5,
                histogram: 0.5,
                trend: t,
                stable: true,
            }),
            volume_ratio,
        }
    }

    fn full_snapshot(rsi: f64, trend: MacdTrend, ratio: f64) -> IndicatorSnapshot {
        snapshot(Some(100.0), Some(95.0), Some(rsi), Some(trend), Some(ratio))
    }

    #[test]
    fn oversold_below_30() {
        let r = classify("BTC", 90.0, None, full_snapshot(29.9, MacdTrend::Bearish, 1.0), None);
        assert!(r.alerts.contains(&AlertTag::Oversold));
        assert_eq!(r.status, Status::Oversold);

        let r = classify("BTC", 90.0, None, full_snapshot(30.0, MacdTrend::Bearish, 1.0), None);
        assert!(!r.alerts.contains(&AlertTag::Oversold));
        assert_eq!(r.status, Status::Normal);
    }

    #[test]
    fn overbought_above_70() {
        let r = classify("ETH", 120.0, None, full_snapshot(70.1, MacdTrend::Bullish, 1.0), None);
        assert!(r.alerts.contains(&AlertTag::Overbought));
        assert_eq!(r.status, Status::Overbought);

        let r = classify("ETH", 120.0, None, full_snapshot(70.0, MacdTrend::Bullish, 1.0), None);
        assert!(!r.alerts.contains(&AlertTag::Overbought));
    }

    #[test]
    fn volume_spike_is_strictly_greater_than_two() {
        let at_one = classify("SOL", 90.0, None, full_snapshot(50.0, MacdTrend::Bearish, 1.0), None);
        assert!(!at_one.alerts.contains(&AlertTag::VolumeSpike));

        let at_two = classify("SOL", 90.0, None, full_snapshot(50.0, MacdTrend::Bearish, 2.0), None);
        assert!(!at_two.alerts.contains(&AlertTag::VolumeSpike));

        let above = classify("SOL", 90.0, None, full_snapshot(50.0, MacdTrend::Bearish, 2.0001), None);
        assert!(above.alerts.contains(&AlertTag::VolumeSpike));
    }

    #[test]
    fn bullish_setup_requires_all_four_legs() {
        // price 120 > sma20 100 > sma50 95, bullish MACD, RSI 50.
        let r = classify("XRP", 120.0, None, full_snapshot(50.0, MacdTrend::Bullish, 1.0), None);
        assert_eq!(r.alerts, vec![AlertTag::BullishSetup]);

        // RSI band is inclusive on both edges.
        for rsi in [40.0, 60.0] {
            let r = classify("XRP", 120.0, None, full_snapshot(rsi, MacdTrend::Bullish, 1.0), None);
            assert!(r.alerts.contains(&AlertTag::BullishSetup), "rsi={rsi}");
        }
        for rsi in [39.9, 60.1] {
            let r = classify("XRP", 120.0, None, full_snapshot(rsi, MacdTrend::Bullish, 1.0), None);
            assert!(!r.alerts.contains(&AlertTag::BullishSetup), "rsi={rsi}");
        }

        // Price below the short trend level kills it.
        let r = classify("XRP", 99.0, None, full_snapshot(50.0, MacdTrend::Bullish, 1.0), None);
        assert!(!r.alerts.contains(&AlertTag::BullishSetup));

        // Bearish MACD kills it.
        let r = classify("XRP", 120.0, None, full_snapshot(50.0, MacdTrend::Bearish, 1.0), None);
        assert!(!r.alerts.contains(&AlertTag::BullishSetup));
    }

    #[test]
    fn breakdown_risk_requires_falling_rsi() {
        let snap = || full_snapshot(45.0, MacdTrend::Bearish, 1.0);

        let r = classify("BNB", 90.0, None, snap(), Some(RsiTrend::Down));
        assert_eq!(r.alerts, vec![AlertTag::BreakdownRisk]);

        // Flat or rising RSI, or unknown trend, must not trigger.
        for trend in [Some(RsiTrend::Up), Some(RsiTrend::Flat), None] {
            let r = classify("BNB", 90.0, None, snap(), trend);
            assert!(r.alerts.is_empty(), "trend={trend:?}");
        }

        // Price above either trend level must not trigger.
        let r = classify("BNB", 97.0, None, snap(), Some(RsiTrend::Down));
        assert!(r.alerts.is_empty());
    }

    #[test]
    fn multiple_tags_can_coexist() {
        // Oversold + falling RSI + bearish MACD below both levels + spike.
        let r = classify(
            "AAVE",
            90.0,
            Some(-12.5),
            full_snapshot(25.0, MacdTrend::Bearish, 3.0),
            Some(RsiTrend::Down),
        );
        assert!(r.alerts.contains(&AlertTag::Oversold));
        assert!(r.alerts.contains(&AlertTag::VolumeSpike));
        assert!(r.alerts.contains(&AlertTag::BreakdownRisk));
        assert_eq!(r.status, Status::Oversold);
    }

    #[test]
    fn missing_indicators_suppress_conditions() {
        // RSI undefined: neither threshold tag may fire, and nothing panics.
        let r = classify(
            "PUMP",
            50.0,
            None,
            snapshot(Some(40.0), Some(45.0), None, Some(MacdTrend::Bearish), Some(5.0)),
            Some(RsiTrend::Down),
        );
        assert!(!r.alerts.contains(&AlertTag::Oversold));
        assert!(!r.alerts.contains(&AlertTag::Overbought));
        assert!(!r.alerts.contains(&AlertTag::BullishSetup));
        assert!(!r.alerts.contains(&AlertTag::BreakdownRisk));
        // The spike only needs the ratio, which is present.
        assert_eq!(r.alerts, vec![AlertTag::VolumeSpike]);
        assert_eq!(r.status, Status::Normal);
    }

    #[test]
    fn empty_snapshot_yields_normal_and_no_alerts() {
        let r = classify("STABLE", 1.0, None, snapshot(None, None, None, None, None), None);
        assert!(r.alerts.is_empty());
        assert_eq!(r.status, Status::Normal);
    }
}
