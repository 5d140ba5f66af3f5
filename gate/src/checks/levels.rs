//! ATR-relative level validation and the deterministic rescaler.
//!
//! Stop-loss and target distances from spot are measured in ATR multiples
//! at the entry timeframe. In-bounds distances pass untouched. Out-of-bounds
//! distances are clamped to the nearest bound and the levels recomputed
//! from spot — status REWRITE, with the original and rescaled multiples in
//! the reasons. This is the only gate allowed to self-heal a violation;
//! wrong-side levels (a data-quality defect, not a sizing one) FAIL
//! outright.

use crate::config::GateConfig;
use crate::outcome::ValidationResult;
use crate::signal::OptionSide;

/// The validated (possibly rescaled) risk geometry, in both price and
/// ATR-multiple form. Downstream gates and the final payload read these,
/// never the candidate's raw levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskLevels {
    pub atr: f64,
    pub stop_loss: f64,
    pub target: f64,
    pub k_sl: f64,
    pub k_tp: f64,
}

/// Level gate output: the per-gate result plus the geometry for downstream
/// consumers. `levels` is `None` only when the geometry was unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelOutcome {
    pub result: ValidationResult,
    pub levels: Option<RiskLevels>,
    pub rescaled: bool,
}

pub fn check_levels(
    side: OptionSide,
    spot: f64,
    stop_loss: f64,
    target: f64,
    atr: f64,
    cfg: &GateConfig,
) -> LevelOutcome {
    // Side-aware distances. For a CALL the stop sits below spot and the
    // target above; mirrored for a PUT.
    let (sl_dist, tp_dist) = match side {
        OptionSide::Call => (spot - stop_loss, target - spot),
        OptionSide::Put => (stop_loss - spot, spot - target),
    };

    let mut wrong_side = Vec::new();
    if sl_dist <= 0.0 {
        wrong_side.push(format!(
            "stop-loss {:.2} on wrong side of spot {:.2} for {}",
            stop_loss, spot, side
        ));
    }
    if tp_dist <= 0.0 {
        wrong_side.push(format!(
            "target {:.2} on wrong side of spot {:.2} for {}",
            target, spot, side
        ));
    }
    if !wrong_side.is_empty() {
        return LevelOutcome {
            result: ValidationResult::fail_all(wrong_side),
            levels: None,
            rescaled: false,
        };
    }

    let k_sl_raw = sl_dist / atr;
    let k_tp_raw = tp_dist / atr;

    let k_sl = cfg.sl_bounds.clamp(k_sl_raw);
    let mut k_tp = cfg.tp_bounds.clamp(k_tp_raw);

    let mut reasons = Vec::new();
    if k_sl != k_sl_raw {
        reasons.push(format!(
            "stop distance {:.2}x ATR outside [{:.2}, {:.2}], rescaled to {:.2}x",
            k_sl_raw, cfg.sl_bounds.min, cfg.sl_bounds.max, k_sl
        ));
    }
    if k_tp != k_tp_raw {
        reasons.push(format!(
            "target distance {:.2}x ATR outside [{:.2}, {:.2}], rescaled to {:.2}x",
            k_tp_raw, cfg.tp_bounds.min, cfg.tp_bounds.max, k_tp
        ));
    }

    // Favorable skew: the target distance may never be shorter than the
    // stop distance.
    if k_tp < k_sl {
        reasons.push(format!(
            "target distance {:.2}x ATR below stop distance {:.2}x, lifted to {:.2}x",
            k_tp, k_sl, k_sl
        ));
        k_tp = k_sl;
    }

    let rescaled = !reasons.is_empty();

    let (stop_loss, target) = match side {
        OptionSide::Call => (spot - k_sl * atr, spot + k_tp * atr),
        OptionSide::Put => (spot + k_sl * atr, spot - k_tp * atr),
    };

    let levels = RiskLevels {
        atr,
        stop_loss,
        target,
        k_sl,
        k_tp,
    };

    let result = if rescaled {
        ValidationResult::rewrite(reasons)
    } else {
        ValidationResult::pass(format!(
            "stop {:.2}x ATR, target {:.2}x ATR within bounds (ATR {:.2})",
            k_sl, k_tp, atr
        ))
    };

    LevelOutcome {
        result,
        levels: Some(levels),
        rescaled,
    }
}
