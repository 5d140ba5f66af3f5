//! Supported candle intervals and the bias/entry timeframe pairing.
//!
//! Scalping setups are always read on two clocks: a coarser *bias*
//! timeframe that sets directional context, and a finer *entry* timeframe
//! that times the trigger. `TimeframePair` encodes that relationship; which
//! pairs are actually tradable is decided by the gate's allow-list, not
//! here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Candle interval supported by the data feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    M1,
    M3,
    M5,
    M15,
    M30,
    H1,
}

impl Timeframe {
    /// Interval length in minutes. Used for the strictly-finer ordering test.
    pub fn minutes(&self) -> u32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M3 => 3,
            Timeframe::M5 => 5,
            Timeframe::M15 => 15,
            Timeframe::M30 => 30,
            Timeframe::H1 => 60,
        }
    }

    /// True when `self` is a strictly finer grain than `other`.
    pub fn is_finer_than(&self, other: &Timeframe) -> bool {
        self.minutes() < other.minutes()
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timeframe::M1 => "1m",
            Timeframe::M3 => "3m",
            Timeframe::M5 => "5m",
            Timeframe::M15 => "15m",
            Timeframe::M30 => "30m",
            Timeframe::H1 => "1h",
        };
        f.write_str(s)
    }
}

impl FromStr for Timeframe {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Timeframe::M1),
            "3m" => Ok(Timeframe::M3),
            "5m" => Ok(Timeframe::M5),
            "15m" => Ok(Timeframe::M15),
            "30m" => Ok(Timeframe::M30),
            "1h" => Ok(Timeframe::H1),
            other => Err(anyhow::anyhow!("Unsupported timeframe: {}", other)),
        }
    }
}

/// The (bias, entry) timeframe combination a candidate was generated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeframePair {
    pub bias: Timeframe,
    pub entry: Timeframe,
}

impl TimeframePair {
    pub fn new(bias: Timeframe, entry: Timeframe) -> Self {
        Self { bias, entry }
    }

    /// Entry must be strictly finer than bias; equal grains are invalid.
    pub fn is_well_ordered(&self) -> bool {
        self.entry.is_finer_than(&self.bias)
    }

    pub fn id(&self) -> String {
        format!("{}/{}", self.bias, self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        for tf in [
            Timeframe::M1,
            Timeframe::M3,
            Timeframe::M5,
            Timeframe::M15,
            Timeframe::M30,
            Timeframe::H1,
        ] {
            let parsed: Timeframe = tf.to_string().parse().unwrap();
            assert_eq!(parsed, tf);
        }
    }

    #[test]
    fn unknown_interval_fails_to_parse() {
        assert!("4h".parse::<Timeframe>().is_err());
        assert!("".parse::<Timeframe>().is_err());
    }

    #[test]
    fn ordering_is_strict() {
        let ok = TimeframePair::new(Timeframe::M15, Timeframe::M5);
        assert!(ok.is_well_ordered());

        let inverted = TimeframePair::new(Timeframe::M5, Timeframe::M15);
        assert!(!inverted.is_well_ordered());

        let equal = TimeframePair::new(Timeframe::M5, Timeframe::M5);
        assert!(!equal.is_well_ordered());
    }

    #[test]
    fn pair_id_is_bias_slash_entry() {
        let pair = TimeframePair::new(Timeframe::M15, Timeframe::M5);
        assert_eq!(pair.id(), "15m/5m");
    }
}
