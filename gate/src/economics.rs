//! Option economics estimator.
//!
//! Approximates strike liquidity and greeks without a live options book:
//! intrinsic plus a per-instrument time-value seed, a logistic
//! moneyness-based delta, and a synthetic spread percentage that widens as
//! premiums shrink. These are deliberately crude — the trait boundary
//! exists so a real options-chain provider can replace the synthetic model
//! without the gate logic changing.

use std::collections::HashMap;

use market::types::Instrument;
use serde::{Deserialize, Serialize};

use crate::signal::OptionSide;

/// Synthetic quote for one strike at one underlying price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub premium: f64,
    pub intrinsic: f64,
    pub time_value: f64,
    /// Signed delta: positive for calls, negative for puts.
    pub delta: f64,
    /// Estimated bid/ask spread as a percent of premium.
    pub spread_pct: f64,
}

/// Pricing seam consumed by the tradability and premium risk-reward gates.
pub trait OptionEconomics: Send + Sync {
    /// Full quote at the current underlying price.
    fn quote(&self, instrument: &Instrument, side: OptionSide, strike: f64, spot: f64)
    -> OptionQuote;

    /// Premium for the same strike if the underlying moved to `underlying`.
    /// Used to project spot-space stop/target levels into premium space.
    fn premium_at(
        &self,
        instrument: &Instrument,
        side: OptionSide,
        strike: f64,
        underlying: f64,
    ) -> f64;
}

/// Knobs of the synthetic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicsConfig {
    /// ATM time value per instrument, in premium points.
    pub time_value_seed: HashMap<String, f64>,

    /// Fallback time value for instruments without a seed (default 50.0).
    pub default_time_value: f64,

    /// Moneyness scale for the logistic delta, percent of spot (default
    /// 0.5 — one scale unit of moneyness moves delta from 0.50 to ~0.73).
    pub delta_scale_pct: f64,

    /// Synthetic half-spread in premium points (default 0.6). The full
    /// spread is twice this; relative spread widens as premium shrinks.
    pub half_spread: f64,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        let mut time_value_seed = HashMap::new();
        time_value_seed.insert("NIFTY".to_string(), 40.0);
        time_value_seed.insert("BANKNIFTY".to_string(), 90.0);

        Self {
            time_value_seed,
            default_time_value: 50.0,
            delta_scale_pct: 0.5,
            half_spread: 0.6,
        }
    }
}

/// The built-in approximation.
#[derive(Debug, Clone, Default)]
pub struct SyntheticEconomics {
    cfg: EconomicsConfig,
}

impl SyntheticEconomics {
    pub fn new(cfg: EconomicsConfig) -> Self {
        Self { cfg }
    }

    fn time_value(&self, instrument: &Instrument) -> f64 {
        self.cfg
            .time_value_seed
            .get(&instrument.symbol)
            .copied()
            .unwrap_or(self.cfg.default_time_value)
    }

    fn intrinsic(side: OptionSide, strike: f64, underlying: f64) -> f64 {
        match side {
            OptionSide::Call => (underlying - strike).max(0.0),
            OptionSide::Put => (strike - underlying).max(0.0),
        }
    }

    /// Logistic delta from moneyness. ATM lands on ±0.5, deep ITM
    /// approaches ±1, far OTM approaches 0.
    fn delta(&self, side: OptionSide, strike: f64, spot: f64) -> f64 {
        let scale = (self.cfg.delta_scale_pct / 100.0) * spot;
        let moneyness = (spot - strike) / scale;
        let call_delta = 1.0 / (1.0 + (-moneyness).exp());

        match side {
            OptionSide::Call => call_delta,
            OptionSide::Put => call_delta - 1.0,
        }
    }

    fn spread_pct(&self, premium: f64) -> f64 {
        if premium <= 0.0 {
            // Unpriceable quote must fail any spread ceiling downstream.
            return f64::MAX;
        }
        (2.0 * self.cfg.half_spread / premium) * 100.0
    }
}

impl OptionEconomics for SyntheticEconomics {
    fn quote(
        &self,
        instrument: &Instrument,
        side: OptionSide,
        strike: f64,
        spot: f64,
    ) -> OptionQuote {
        let intrinsic = Self::intrinsic(side, strike, spot);
        let time_value = self.time_value(instrument);
        let premium = intrinsic + time_value;

        OptionQuote {
            premium,
            intrinsic,
            time_value,
            delta: self.delta(side, strike, spot),
            spread_pct: self.spread_pct(premium),
        }
    }

    fn premium_at(
        &self,
        instrument: &Instrument,
        side: OptionSide,
        strike: f64,
        underlying: f64,
    ) -> f64 {
        Self::intrinsic(side, strike, underlying) + self.time_value(instrument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nifty() -> Instrument {
        Instrument::new("NIFTY")
    }

    fn model() -> SyntheticEconomics {
        SyntheticEconomics::default()
    }

    #[test]
    fn atm_quote_is_pure_time_value_with_half_delta() {
        let q = model().quote(&nifty(), OptionSide::Call, 24_500.0, 24_500.0);
        assert_eq!(q.intrinsic, 0.0);
        assert_eq!(q.premium, 40.0);
        assert!((q.delta - 0.5).abs() < 1e-9);
    }

    #[test]
    fn put_delta_is_negative_and_mirrors_the_call() {
        let m = model();
        let call = m.quote(&nifty(), OptionSide::Call, 24_400.0, 24_500.0);
        let put = m.quote(&nifty(), OptionSide::Put, 24_400.0, 24_500.0);

        assert!(call.delta > 0.5); // ITM call
        assert!(put.delta < 0.0 && put.delta > -0.5); // OTM put
        assert!((call.delta - put.delta - 1.0).abs() < 1e-9);
    }

    #[test]
    fn deeper_itm_raises_delta_toward_one() {
        let m = model();
        let near = m.delta(OptionSide::Call, 24_400.0, 24_500.0);
        let deep = m.delta(OptionSide::Call, 23_900.0, 24_500.0);
        assert!(deep > near);
        assert!(deep < 1.0);
    }

    #[test]
    fn cheaper_premium_means_wider_relative_spread() {
        let m = model();
        let cheap = m.spread_pct(20.0);
        let rich = m.spread_pct(200.0);
        assert!(cheap > rich);
        assert!((rich - 0.6).abs() < 1e-9); // 1.2 / 200 * 100
    }

    #[test]
    fn unseeded_instrument_uses_the_default_time_value() {
        let q = model().quote(&Instrument::new("SENSEX"), OptionSide::Call, 81_000.0, 81_000.0);
        assert_eq!(q.time_value, 50.0);
    }

    #[test]
    fn premium_at_moves_with_the_underlying() {
        let m = model();
        let entry = m.premium_at(&nifty(), OptionSide::Call, 24_500.0, 24_500.0);
        let at_target = m.premium_at(&nifty(), OptionSide::Call, 24_500.0, 24_620.0);
        let at_stop = m.premium_at(&nifty(), OptionSide::Call, 24_500.0, 24_400.0);

        assert_eq!(at_target - entry, 120.0);
        assert_eq!(entry, at_stop); // both sides of the strike are pure time value
    }
}
