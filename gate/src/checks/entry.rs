//! Entry trigger: entry-timeframe close relative to its EMA20 must match
//! the side at the latest closed candle.

use market::indicators::TimeframeSnapshot;

use crate::outcome::ValidationResult;
use crate::signal::OptionSide;

pub fn check_entry_trigger(side: OptionSide, entry: &TimeframeSnapshot) -> ValidationResult {
    match side {
        OptionSide::Call if entry.close > entry.ema20 => ValidationResult::pass(format!(
            "close {:.2} above entry EMA20 {:.2}",
            entry.close, entry.ema20
        )),
        OptionSide::Put if entry.close < entry.ema20 => ValidationResult::pass(format!(
            "close {:.2} below entry EMA20 {:.2}",
            entry.close, entry.ema20
        )),
        OptionSide::Call => ValidationResult::fail(format!(
            "entry trigger not met for CALL: close {:.2} at or below EMA20 {:.2}",
            entry.close, entry.ema20
        )),
        OptionSide::Put => ValidationResult::fail(format!(
            "entry trigger not met for PUT: close {:.2} at or above EMA20 {:.2}",
            entry.close, entry.ema20
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::GateStatus;

    fn snap(close: f64, ema20: f64) -> TimeframeSnapshot {
        TimeframeSnapshot {
            close,
            ema20,
            ema50: 0.0,
            rsi: 50.0,
            atr: 60.0,
        }
    }

    #[test]
    fn call_passes_above_ema20() {
        let r = check_entry_trigger(OptionSide::Call, &snap(24_510.0, 24_480.0));
        assert_eq!(r.status, GateStatus::Pass);
    }

    #[test]
    fn call_fails_at_or_below_ema20() {
        let r = check_entry_trigger(OptionSide::Call, &snap(24_480.0, 24_480.0));
        assert_eq!(r.status, GateStatus::Fail);
        assert!(r.reasons[0].contains("CALL"));
    }

    #[test]
    fn put_passes_below_ema20() {
        let r = check_entry_trigger(OptionSide::Put, &snap(24_450.0, 24_480.0));
        assert_eq!(r.status, GateStatus::Pass);
    }

    #[test]
    fn put_fails_above_ema20() {
        let r = check_entry_trigger(OptionSide::Put, &snap(24_510.0, 24_480.0));
        assert_eq!(r.status, GateStatus::Fail);
    }
}
