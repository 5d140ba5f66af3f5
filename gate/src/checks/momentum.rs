//! Momentum zone: RSI must sit inside the side's reset band.
//!
//! The bands are continuation filters near the midline, not
//! overbought/oversold extremes.

use crate::config::RsiBand;
use crate::outcome::ValidationResult;
use crate::signal::OptionSide;

pub fn check_momentum(side: OptionSide, rsi: f64, band: RsiBand) -> ValidationResult {
    let zone = match side {
        OptionSide::Call => "bullish",
        OptionSide::Put => "bearish",
    };

    if band.contains(rsi) {
        ValidationResult::pass(format!(
            "RSI {:.1} inside {} reset band [{:.0}, {:.0}]",
            rsi, zone, band.lo, band.hi
        ))
    } else {
        ValidationResult::fail(format!(
            "RSI {:.1} outside {} reset band [{:.0}, {:.0}]",
            rsi, zone, band.lo, band.hi
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::GateStatus;

    const BULL: RsiBand = RsiBand { lo: 45.0, hi: 60.0 };

    #[test]
    fn band_edges_are_inclusive() {
        assert_eq!(check_momentum(OptionSide::Call, 45.0, BULL).status, GateStatus::Pass);
        assert_eq!(check_momentum(OptionSide::Call, 60.0, BULL).status, GateStatus::Pass);
    }

    #[test]
    fn outside_the_band_fails_with_the_value_in_the_reason() {
        let r = check_momentum(OptionSide::Call, 71.3, BULL);
        assert_eq!(r.status, GateStatus::Fail);
        assert!(r.reasons[0].contains("71.3"));
    }
}
