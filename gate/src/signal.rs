//! The raw trade candidate handed to the gate.

use std::fmt;

use market::timeframe::TimeframePair;
use market::types::Instrument;
use serde::{Deserialize, Serialize};

/// Option side of a candidate. Always derived from market structure — a
/// declared side on the raw input is advisory and never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSide {
    #[serde(rename = "CALL")]
    Call,
    #[serde(rename = "PUT")]
    Put,
}

impl OptionSide {
    pub fn label(&self) -> &'static str {
        match self {
            OptionSide::Call => "CALL",
            OptionSide::Put => "PUT",
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scalping trade candidate as produced upstream (signal generator or a
/// manual test driver). Read-only to the gate: evaluation never mutates it,
/// and nothing of it is retained after the call beyond the rate-limiter
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSignal {
    pub instrument: Instrument,
    pub timeframes: TimeframePair,

    /// Current underlying price.
    pub spot: f64,
    /// Proposed option strike.
    pub strike: f64,
    /// Premium the upstream producer observed/proposed.
    pub premium: f64,
    /// Expiry label (e.g. "2026-08-13" or "WEEKLY").
    pub expiry: String,

    /// Proposed stop-loss on the underlying.
    pub stop_loss: f64,
    /// Proposed targets on the underlying; the first (nearest) target is
    /// the one validated, later ones are advisory.
    pub targets: Vec<f64>,

    /// Side the producer had in mind, if any. Ignored for classification.
    pub declared_side: Option<OptionSide>,
}

impl CandidateSignal {
    /// First target, the one the risk model is validated against.
    pub fn primary_target(&self) -> Option<f64> {
        self.targets.first().copied()
    }

    /// Structural defects that make the candidate unevaluable. A non-empty
    /// list means zero numeric work is performed on it.
    pub fn structural_issues(&self) -> Vec<String> {
        fn positive(name: &str, v: f64, out: &mut Vec<String>) {
            if !(v.is_finite() && v > 0.0) {
                out.push(format!("{} must be a positive number, got {}", name, v));
            }
        }

        let mut issues = Vec::new();

        if self.instrument.symbol.trim().is_empty() {
            issues.push("instrument symbol is empty".to_string());
        }
        if self.expiry.trim().is_empty() {
            issues.push("expiry label is empty".to_string());
        }

        positive("spot", self.spot, &mut issues);
        positive("strike", self.strike, &mut issues);
        positive("premium", self.premium, &mut issues);
        positive("stop_loss", self.stop_loss, &mut issues);

        match self.primary_target() {
            None => issues.push("at least one target is required".to_string()),
            Some(t) => positive("target", t, &mut issues),
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market::timeframe::Timeframe;

    fn candidate() -> CandidateSignal {
        CandidateSignal {
            instrument: Instrument::new("NIFTY"),
            timeframes: TimeframePair::new(Timeframe::M15, Timeframe::M5),
            spot: 24_500.0,
            strike: 24_500.0,
            premium: 150.0,
            expiry: "WEEKLY".to_string(),
            stop_loss: 24_400.0,
            targets: vec![24_620.0, 24_700.0],
            declared_side: None,
        }
    }

    #[test]
    fn well_formed_candidate_has_no_issues() {
        assert!(candidate().structural_issues().is_empty());
    }

    #[test]
    fn missing_targets_is_structural() {
        let mut c = candidate();
        c.targets.clear();
        let issues = c.structural_issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("target"));
    }

    #[test]
    fn non_finite_spot_is_structural() {
        let mut c = candidate();
        c.spot = f64::NAN;
        assert!(!c.structural_issues().is_empty());
    }

    #[test]
    fn all_defects_are_reported_not_just_the_first() {
        let mut c = candidate();
        c.spot = 0.0;
        c.premium = -1.0;
        c.expiry = String::new();
        assert_eq!(c.structural_issues().len(), 3);
    }

    #[test]
    fn primary_target_is_the_first() {
        assert_eq!(candidate().primary_target(), Some(24_620.0));
    }
}
