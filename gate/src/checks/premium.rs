//! Premium risk-reward: the spot-space levels translated into premium
//! space, net of round-trip costs.
//!
//! This gate always consumes the level gate's output — the possibly
//! rescaled geometry — so its ratio reflects the corrected trade, not the
//! raw candidate.

use market::types::Instrument;

use crate::checks::levels::RiskLevels;
use crate::config::GateConfig;
use crate::economics::OptionEconomics;
use crate::outcome::ValidationResult;
use crate::signal::OptionSide;

pub fn check_premium_rr(
    side: OptionSide,
    instrument: &Instrument,
    strike: f64,
    spot: f64,
    levels: &RiskLevels,
    economics: &dyn OptionEconomics,
    cfg: &GateConfig,
) -> ValidationResult {
    let p_entry = economics.premium_at(instrument, side, strike, spot);
    let p_target = economics.premium_at(instrument, side, strike, levels.target);
    let p_stop = economics.premium_at(instrument, side, strike, levels.stop_loss);

    let reward = p_target - p_entry - cfg.round_trip_cost;
    let risk = p_entry - p_stop;

    if risk <= 0.0 {
        return ValidationResult::fail(format!(
            "premium risk non-positive: entry {:.2} vs stop {:.2} — stop sits entirely in time value",
            p_entry, p_stop
        ));
    }
    if reward <= 0.0 {
        return ValidationResult::fail(format!(
            "premium reward {:.2} not positive after round-trip cost {:.2}",
            reward, cfg.round_trip_cost
        ));
    }

    let rr = reward / risk;
    if rr >= cfg.min_premium_rr {
        ValidationResult::pass(format!(
            "premium R:R {:.2} >= {:.2} (reward {:.2}, risk {:.2})",
            rr, cfg.min_premium_rr, reward, risk
        ))
    } else {
        ValidationResult::fail(format!(
            "premium R:R {:.2} below minimum {:.2} (reward {:.2}, risk {:.2})",
            rr, cfg.min_premium_rr, reward, risk
        ))
    }
}
