//! Configuration surface for the gate.
//!
//! Every threshold a gate check compares against lives here — nothing is
//! hard-coded inside the checks. Defaults target index option scalping on a
//! 15m bias / 5m entry pairing and are documented field by field.

use market::timeframe::{Timeframe, TimeframePair};
use serde::{Deserialize, Serialize};

/// Inclusive RSI band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiBand {
    pub lo: f64,
    pub hi: f64,
}

impl RsiBand {
    pub fn contains(&self, rsi: f64) -> bool {
        rsi >= self.lo && rsi <= self.hi
    }
}

/// Which timeframe's RSI feeds the momentum gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsiBasis {
    Entry,
    Bias,
}

/// Allowed range for a level distance, expressed as ATR multiples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtrBounds {
    pub min: f64,
    pub max: f64,
}

impl AtrBounds {
    pub fn contains(&self, multiple: f64) -> bool {
        multiple >= self.min && multiple <= self.max
    }

    /// Nearest in-bounds multiple.
    pub fn clamp(&self, multiple: f64) -> f64 {
        multiple.clamp(self.min, self.max)
    }
}

/// Actionable |delta| band: below it the strike is too far OTM to be a
/// probable scalp, above it too deep ITM to be capital-efficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaBand {
    pub min: f64,
    pub max: f64,
}

impl DeltaBand {
    pub fn contains(&self, delta_abs: f64) -> bool {
        delta_abs >= self.min && delta_abs <= self.max
    }
}

/// A scheduled no-trade window (macro release, policy announcement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventWindow {
    pub label: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

/// All gate thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Tradable (bias, entry) combinations. Anything else is a structural
    /// rejection before any market data is fetched.
    pub allowed_pairs: Vec<TimeframePair>,

    /// Bullish RSI reset band (default [45, 60]). Deliberately centred near
    /// 50: this is a momentum-continuation filter, not the overbought /
    /// oversold semantic used elsewhere in the system.
    pub rsi_bull: RsiBand,

    /// Bearish RSI reset band (default [40, 55]).
    pub rsi_bear: RsiBand,

    /// RSI source timeframe (default entry).
    pub rsi_basis: RsiBasis,

    /// Stop-loss distance bounds in ATR multiples (default [1.0, 2.0]).
    pub sl_bounds: AtrBounds,

    /// Target distance bounds in ATR multiples (default [1.2, 2.4] — sits
    /// above the stop bounds so default geometry skews reward >= risk).
    pub tp_bounds: AtrBounds,

    /// Maximum tolerable synthetic spread, percent of premium (default 2.5).
    pub max_spread_pct: f64,

    /// Actionable |delta| band (default [0.35, 0.65]).
    pub delta_band: DeltaBand,

    /// Minimum premium-space reward:risk after costs (default 1.2).
    pub min_premium_rr: f64,

    /// Estimated round-trip transaction cost in premium points, netted out
    /// of the premium reward (default 4.0).
    pub round_trip_cost: f64,

    /// Cool-down between accepted evaluations per (instrument, entry
    /// timeframe, side) (default 5 minutes).
    pub cooldown_ms: u64,

    /// Minimum candles per timeframe — the slowest indicator (EMA50) must
    /// be seedable (default 50).
    pub min_candles: usize,

    /// ATR period for the internal fallback computation (default 14).
    pub atr_period: usize,

    /// Scheduled no-trade windows (default empty).
    pub event_windows: Vec<EventWindow>,

    /// WARN margin ahead of an event window (default 15 minutes).
    pub event_warn_margin_ms: u64,

    /// Mode label stamped on final payloads.
    pub mode: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            allowed_pairs: vec![
                TimeframePair::new(Timeframe::M15, Timeframe::M5),
                TimeframePair::new(Timeframe::M15, Timeframe::M3),
            ],
            rsi_bull: RsiBand { lo: 45.0, hi: 60.0 },
            rsi_bear: RsiBand { lo: 40.0, hi: 55.0 },
            rsi_basis: RsiBasis::Entry,
            sl_bounds: AtrBounds { min: 1.0, max: 2.0 },
            tp_bounds: AtrBounds { min: 1.2, max: 2.4 },
            max_spread_pct: 2.5,
            delta_band: DeltaBand {
                min: 0.35,
                max: 0.65,
            },
            min_premium_rr: 1.2,
            round_trip_cost: 4.0,
            cooldown_ms: 5 * 60 * 1000,
            min_candles: 50,
            atr_period: 14,
            event_windows: Vec::new(),
            event_warn_margin_ms: 15 * 60 * 1000,
            mode: "SCALP".to_string(),
        }
    }
}

impl GateConfig {
    pub fn is_pair_allowed(&self, pair: &TimeframePair) -> bool {
        pair.is_well_ordered() && self.allowed_pairs.contains(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pairs_are_well_ordered() {
        let cfg = GateConfig::default();
        for pair in &cfg.allowed_pairs {
            assert!(pair.is_well_ordered(), "{} is not bias/entry ordered", pair.id());
        }
    }

    #[test]
    fn unknown_pair_is_not_allowed_even_if_well_ordered() {
        let cfg = GateConfig::default();
        let pair = TimeframePair::new(Timeframe::H1, Timeframe::M30);
        assert!(pair.is_well_ordered());
        assert!(!cfg.is_pair_allowed(&pair));
    }

    #[test]
    fn atr_bounds_clamp_to_nearest_edge() {
        let bounds = AtrBounds { min: 1.0, max: 2.0 };
        assert_eq!(bounds.clamp(3.33), 2.0);
        assert_eq!(bounds.clamp(0.4), 1.0);
        assert_eq!(bounds.clamp(1.5), 1.5);
    }

    #[test]
    fn reset_bands_are_near_the_midline_not_the_extremes() {
        let cfg = GateConfig::default();
        assert!(cfg.rsi_bull.contains(50.0));
        assert!(cfg.rsi_bear.contains(50.0));
        assert!(!cfg.rsi_bull.contains(70.0));
        assert!(!cfg.rsi_bear.contains(30.0));
    }
}
