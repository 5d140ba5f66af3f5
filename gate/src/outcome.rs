//! Gate outcome types.
//!
//! The observed contract has an asymmetric return shape: an array of side
//! evaluations when at least one side ran, and a single bare result when
//! the input dies before side generation. Callers rely on that distinction
//! ("no side evaluated" vs "sides evaluated but rejected"), so it is kept
//! explicit here as a tagged [`Verdict`] rather than flattened into one
//! shape. Worth flagging in review, but it is the contract.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::payload::FinalPayload;
use crate::signal::OptionSide;

/// Outcome of a single gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "REWRITE")]
    Rewrite,
    #[serde(rename = "WARN")]
    Warn,
}

/// One gate's verdict plus its ordered, human-readable reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: GateStatus,
    pub reasons: Vec<String>,
}

impl ValidationResult {
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            status: GateStatus::Pass,
            reasons: vec![reason.into()],
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            status: GateStatus::Fail,
            reasons: vec![reason.into()],
        }
    }

    pub fn fail_all(reasons: Vec<String>) -> Self {
        Self {
            status: GateStatus::Fail,
            reasons,
        }
    }

    pub fn rewrite(reasons: Vec<String>) -> Self {
        Self {
            status: GateStatus::Rewrite,
            reasons,
        }
    }

    pub fn warn(reason: impl Into<String>) -> Self {
        Self {
            status: GateStatus::Warn,
            reasons: vec![reason.into()],
        }
    }

    pub fn is_fail(&self) -> bool {
        self.status == GateStatus::Fail
    }
}

/// Identity of each gate in the pipeline, in canonical run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateName {
    RateLimit,
    EntryTrigger,
    Structure,
    Momentum,
    Levels,
    Tradability,
    PremiumRiskReward,
    EventFilter,
}

impl GateName {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateName::RateLimit => "rate_limit",
            GateName::EntryTrigger => "entry_trigger",
            GateName::Structure => "structure",
            GateName::Momentum => "momentum",
            GateName::Levels => "levels",
            GateName::Tradability => "tradability",
            GateName::PremiumRiskReward => "premium_risk_reward",
            GateName::EventFilter => "event_filter",
        }
    }
}

impl fmt::Display for GateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-side gate results in run order.
///
/// Insertion order is the fixed pipeline order, which keeps serialized
/// output byte-stable for identical inputs. A side rejected by a hard gate
/// carries only the gates that actually ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validations {
    entries: Vec<(GateName, ValidationResult)>,
}

impl Validations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, gate: GateName, result: ValidationResult) {
        debug_assert!(
            self.get(gate).is_none(),
            "gate {} reported twice",
            gate.as_str()
        );
        self.entries.push((gate, result));
    }

    pub fn get(&self, gate: GateName) -> Option<&ValidationResult> {
        self.entries
            .iter()
            .find(|(name, _)| *name == gate)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(GateName, ValidationResult)> {
        self.entries.iter()
    }

    pub fn any_fail(&self) -> bool {
        self.entries.iter().any(|(_, r)| r.is_fail())
    }
}

impl Serialize for Validations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, result) in &self.entries {
            map.serialize_entry(name.as_str(), result)?;
        }
        map.end()
    }
}

/// Terminal state of one side's evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideStatus {
    #[serde(rename = "PASSED")]
    Passed,
    #[serde(rename = "REWRITE")]
    Rewrite,
    #[serde(rename = "REJECTED")]
    Rejected,
}

/// Everything the pipeline produced for one side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideEvaluation {
    pub side: OptionSide,
    pub status: SideStatus,
    pub validations: Validations,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_payload: Option<FinalPayload>,
}

/// Overall result of one gate call.
///
/// Serializes untagged to mirror the wire contract: a JSON array of side
/// evaluations, or a single object for a pre-side rejection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Verdict {
    /// Input rejected before side generation (invalid timeframe pair,
    /// structural defect, insufficient data, no directional edge).
    Rejected(ValidationResult),
    /// At least one side was classified viable and ran the pipeline.
    Evaluated(Vec<SideEvaluation>),
}

impl Verdict {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Verdict::Rejected(ValidationResult::fail(reason))
    }

    pub fn evaluations(&self) -> Option<&[SideEvaluation]> {
        match self {
            Verdict::Evaluated(sides) => Some(sides),
            Verdict::Rejected(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validations_preserve_run_order() {
        let mut v = Validations::new();
        v.push(GateName::RateLimit, ValidationResult::pass("ok"));
        v.push(GateName::Levels, ValidationResult::rewrite(vec!["clamped".into()]));
        v.push(GateName::Tradability, ValidationResult::fail("spread"));

        let order: Vec<GateName> = v.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            order,
            vec![GateName::RateLimit, GateName::Levels, GateName::Tradability]
        );
        assert!(v.any_fail());
    }

    #[test]
    fn validations_serialize_as_a_map_in_order() {
        let mut v = Validations::new();
        v.push(GateName::EntryTrigger, ValidationResult::pass("ok"));
        v.push(GateName::Momentum, ValidationResult::fail("rsi out of band"));

        let json = serde_json::to_string(&v).unwrap();
        let trigger = json.find("entry_trigger").unwrap();
        let momentum = json.find("momentum").unwrap();
        assert!(trigger < momentum);
    }

    #[test]
    fn rejected_verdict_serializes_as_object_not_array() {
        let v = Verdict::rejected("no directional edge");
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.starts_with('{'));

        let e = Verdict::Evaluated(vec![]);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.starts_with('['));
    }
}
