//! Structure confirmation: the bias-timeframe EMA20/EMA50 ordering must
//! agree with the side.

use market::indicators::TimeframeSnapshot;

use crate::outcome::ValidationResult;
use crate::signal::OptionSide;

pub fn check_structure(side: OptionSide, bias: &TimeframeSnapshot) -> ValidationResult {
    match side {
        OptionSide::Call if bias.ema20 > bias.ema50 => ValidationResult::pass(format!(
            "bias EMA20 {:.2} above EMA50 {:.2}",
            bias.ema20, bias.ema50
        )),
        OptionSide::Put if bias.ema20 < bias.ema50 => ValidationResult::pass(format!(
            "bias EMA20 {:.2} below EMA50 {:.2}",
            bias.ema20, bias.ema50
        )),
        OptionSide::Call => ValidationResult::fail(format!(
            "structure against CALL: bias EMA20 {:.2} not above EMA50 {:.2}",
            bias.ema20, bias.ema50
        )),
        OptionSide::Put => ValidationResult::fail(format!(
            "structure against PUT: bias EMA20 {:.2} not below EMA50 {:.2}",
            bias.ema20, bias.ema50
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::GateStatus;

    fn snap(ema20: f64, ema50: f64) -> TimeframeSnapshot {
        TimeframeSnapshot {
            close: 0.0,
            ema20,
            ema50,
            rsi: 50.0,
            atr: 60.0,
        }
    }

    #[test]
    fn bullish_ordering_confirms_call() {
        let r = check_structure(OptionSide::Call, &snap(24_470.0, 24_430.0));
        assert_eq!(r.status, GateStatus::Pass);
    }

    #[test]
    fn bullish_ordering_rejects_put() {
        let r = check_structure(OptionSide::Put, &snap(24_470.0, 24_430.0));
        assert_eq!(r.status, GateStatus::Fail);
    }

    #[test]
    fn equal_emas_confirm_neither_side() {
        assert_eq!(
            check_structure(OptionSide::Call, &snap(24_470.0, 24_470.0)).status,
            GateStatus::Fail
        );
        assert_eq!(
            check_structure(OptionSide::Put, &snap(24_470.0, 24_470.0)).status,
            GateStatus::Fail
        );
    }
}
