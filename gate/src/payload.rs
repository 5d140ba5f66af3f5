//! Final trade payload, built only for PASSED/REWRITE sides.

use market::indicators::TimeframeSnapshot;
use market::timeframe::TimeframePair;
use market::types::Instrument;
use serde::{Deserialize, Serialize};

use crate::checks::levels::RiskLevels;
use crate::economics::OptionQuote;
use crate::outcome::SideStatus;
use crate::signal::{CandidateSignal, OptionSide};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Liquidity {
    pub spread_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionLeg {
    pub selected_strike: f64,
    pub premium_entry: f64,
    pub greeks: Greeks,
    pub liquidity: Liquidity,
}

/// The validated risk geometry in ATR terms. `k_sl`/`k_tp` are the final
/// (possibly rescaled) multiples, never the raw candidate's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    pub atr_basis: f64,
    pub k_sl: f64,
    pub k_tp: f64,
    pub stop_loss: f64,
    pub target: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub status: SideStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalPayload {
    pub instrument: Instrument,
    pub mode: String,
    pub timeframes: TimeframePair,
    pub side: OptionSide,
    pub spot: f64,
    pub option: OptionLeg,
    pub risk_model: RiskModel,
    pub entry_rule_text: String,
    pub decision: Decision,
}

/// Assemble the payload from the gate outputs.
pub fn build_payload(
    candidate: &CandidateSignal,
    side: OptionSide,
    status: SideStatus,
    levels: &RiskLevels,
    quote: &OptionQuote,
    entry: &TimeframeSnapshot,
    mode: &str,
) -> FinalPayload {
    let relation = match side {
        OptionSide::Call => "above",
        OptionSide::Put => "below",
    };

    let entry_rule_text = format!(
        "Enter {} if {} close holds {} EMA20 ({:.2}); stop {:.2}, target {:.2}",
        side,
        candidate.timeframes.entry,
        relation,
        entry.ema20,
        levels.stop_loss,
        levels.target
    );

    FinalPayload {
        instrument: candidate.instrument.clone(),
        mode: mode.to_string(),
        timeframes: candidate.timeframes,
        side,
        spot: candidate.spot,
        option: OptionLeg {
            selected_strike: candidate.strike,
            premium_entry: quote.premium,
            greeks: Greeks { delta: quote.delta },
            liquidity: Liquidity {
                spread_pct: quote.spread_pct,
            },
        },
        risk_model: RiskModel {
            atr_basis: levels.atr,
            k_sl: levels.k_sl,
            k_tp: levels.k_tp,
            stop_loss: levels.stop_loss,
            target: levels.target,
        },
        entry_rule_text,
        decision: Decision { status },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market::timeframe::Timeframe;

    #[test]
    fn entry_rule_text_reads_like_an_instruction() {
        let candidate = CandidateSignal {
            instrument: Instrument::new("NIFTY"),
            timeframes: TimeframePair::new(Timeframe::M15, Timeframe::M5),
            spot: 24_500.0,
            strike: 24_450.0,
            premium: 95.0,
            expiry: "WEEKLY".to_string(),
            stop_loss: 24_410.0,
            targets: vec![24_620.0],
            declared_side: None,
        };

        let levels = RiskLevels {
            atr: 60.0,
            stop_loss: 24_410.0,
            target: 24_620.0,
            k_sl: 1.5,
            k_tp: 2.0,
        };

        let quote = OptionQuote {
            premium: 90.0,
            intrinsic: 50.0,
            time_value: 40.0,
            delta: 0.6,
            spread_pct: 1.33,
        };

        let entry = TimeframeSnapshot {
            close: 24_510.0,
            ema20: 24_480.1,
            ema50: 24_450.0,
            rsi: 52.0,
            atr: 60.0,
        };

        let payload = build_payload(
            &candidate,
            OptionSide::Call,
            SideStatus::Passed,
            &levels,
            &quote,
            &entry,
            "SCALP",
        );

        assert_eq!(
            payload.entry_rule_text,
            "Enter CALL if 5m close holds above EMA20 (24480.10); stop 24410.00, target 24620.00"
        );
        assert_eq!(payload.risk_model.k_sl, 1.5);
        assert_eq!(payload.option.premium_entry, 90.0);
        assert_eq!(payload.decision.status, SideStatus::Passed);
    }
}
