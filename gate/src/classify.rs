//! Trend/momentum classification: which sides are worth running through
//! the pipeline.
//!
//! Three conditions per side, read off the two timeframe snapshots:
//!   • entry trigger  — entry-timeframe close vs its EMA20
//!   • structure      — bias-timeframe EMA20 vs EMA50 ordering
//!   • momentum reset — RSI inside the side's configured reset band
//!
//! A side with all three is fully confirmed and is returned alone. When
//! neither side is fully confirmed, any side whose reset band contains the
//! RSI and that has at least one other condition in its favour is still
//! evaluated — conflicting trigger/structure input therefore produces both
//! a CALL and a PUT evaluation, each carrying its own diagnostic trail.
//! Zero viable sides means no directional edge.
//!
//! The reset bands sit near the RSI midline on purpose: the gate hunts
//! momentum-continuation entries, not reversals. Overbought/oversold
//! thresholds (>70, <30) are a different semantic and must not leak in
//! here.

use market::indicators::TimeframeSnapshot;

use crate::config::{GateConfig, RsiBasis};
use crate::signal::OptionSide;

/// The per-side condition triple. Shared by the classifier and the
/// confirmation gates so both always agree on what they saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideConditions {
    pub entry_trigger: bool,
    pub structure: bool,
    pub momentum: bool,
}

impl SideConditions {
    pub fn fully_confirmed(&self) -> bool {
        self.entry_trigger && self.structure && self.momentum
    }

    /// Viable enough to run the pipeline: momentum reset plus at least one
    /// of trigger/structure.
    pub fn is_viable(&self) -> bool {
        self.momentum && (self.entry_trigger || self.structure)
    }
}

/// RSI reading the momentum gate uses, per the configured basis.
pub fn rsi_value(entry: &TimeframeSnapshot, bias: &TimeframeSnapshot, cfg: &GateConfig) -> f64 {
    match cfg.rsi_basis {
        RsiBasis::Entry => entry.rsi,
        RsiBasis::Bias => bias.rsi,
    }
}

/// Evaluate one side's condition triple.
pub fn conditions_for(
    side: OptionSide,
    entry: &TimeframeSnapshot,
    bias: &TimeframeSnapshot,
    cfg: &GateConfig,
) -> SideConditions {
    let rsi = rsi_value(entry, bias, cfg);

    match side {
        OptionSide::Call => SideConditions {
            entry_trigger: entry.close > entry.ema20,
            structure: bias.ema20 > bias.ema50,
            momentum: cfg.rsi_bull.contains(rsi),
        },
        OptionSide::Put => SideConditions {
            entry_trigger: entry.close < entry.ema20,
            structure: bias.ema20 < bias.ema50,
            momentum: cfg.rsi_bear.contains(rsi),
        },
    }
}

/// Sides the pipeline should evaluate, in fixed CALL-before-PUT order.
pub fn viable_sides(
    entry: &TimeframeSnapshot,
    bias: &TimeframeSnapshot,
    cfg: &GateConfig,
) -> Vec<OptionSide> {
    let call = conditions_for(OptionSide::Call, entry, bias, cfg);
    let put = conditions_for(OptionSide::Put, entry, bias, cfg);

    // close>EMA20 and close<EMA20 are mutually exclusive, so at most one
    // side can be fully confirmed.
    if call.fully_confirmed() {
        return vec![OptionSide::Call];
    }
    if put.fully_confirmed() {
        return vec![OptionSide::Put];
    }

    let mut sides = Vec::new();
    if call.is_viable() {
        sides.push(OptionSide::Call);
    }
    if put.is_viable() {
        sides.push(OptionSide::Put);
    }
    sides
}
