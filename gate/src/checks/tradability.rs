//! Options tradability: is the proposed strike actually worth trading.
//!
//! Reads the synthetic quote (spread percentage and delta) against the
//! configured ceilings. Both failure modes are reported when both apply.

use crate::config::GateConfig;
use crate::economics::OptionQuote;
use crate::outcome::ValidationResult;

pub fn check_tradability(quote: &OptionQuote, cfg: &GateConfig) -> ValidationResult {
    let mut reasons = Vec::new();

    if quote.spread_pct > cfg.max_spread_pct {
        reasons.push(format!(
            "spread {:.2}% of premium exceeds ceiling {:.2}%",
            quote.spread_pct, cfg.max_spread_pct
        ));
    }

    let delta_abs = quote.delta.abs();
    if delta_abs < cfg.delta_band.min {
        reasons.push(format!(
            "|delta| {:.2} below {:.2}: too far OTM to be a probable scalp",
            delta_abs, cfg.delta_band.min
        ));
    } else if delta_abs > cfg.delta_band.max {
        reasons.push(format!(
            "|delta| {:.2} above {:.2}: too deep ITM to be capital-efficient",
            delta_abs, cfg.delta_band.max
        ));
    }

    if reasons.is_empty() {
        ValidationResult::pass(format!(
            "delta {:.2}, spread {:.2}% within tradable bounds",
            quote.delta, quote.spread_pct
        ))
    } else {
        ValidationResult::fail_all(reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::GateStatus;

    fn quote(delta: f64, spread_pct: f64) -> OptionQuote {
        OptionQuote {
            premium: 100.0,
            intrinsic: 50.0,
            time_value: 50.0,
            delta,
            spread_pct,
        }
    }

    #[test]
    fn actionable_quote_passes() {
        let r = check_tradability(&quote(0.55, 1.2), &GateConfig::default());
        assert_eq!(r.status, GateStatus::Pass);
    }

    #[test]
    fn wide_spread_fails() {
        let r = check_tradability(&quote(0.55, 4.0), &GateConfig::default());
        assert_eq!(r.status, GateStatus::Fail);
        assert!(r.reasons[0].contains("spread"));
    }

    #[test]
    fn far_otm_delta_fails() {
        let r = check_tradability(&quote(0.15, 1.0), &GateConfig::default());
        assert_eq!(r.status, GateStatus::Fail);
        assert!(r.reasons[0].contains("OTM"));
    }

    #[test]
    fn deep_itm_delta_fails() {
        let r = check_tradability(&quote(-0.88, 1.0), &GateConfig::default());
        assert_eq!(r.status, GateStatus::Fail);
        assert!(r.reasons[0].contains("ITM"));
    }

    #[test]
    fn both_defects_are_reported_together() {
        let r = check_tradability(&quote(0.10, 9.0), &GateConfig::default());
        assert_eq!(r.status, GateStatus::Fail);
        assert_eq!(r.reasons.len(), 2);
    }

    #[test]
    fn put_delta_is_judged_by_magnitude() {
        let r = check_tradability(&quote(-0.50, 1.0), &GateConfig::default());
        assert_eq!(r.status, GateStatus::Pass);
    }
}
