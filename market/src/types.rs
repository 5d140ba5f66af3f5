//! Core market data records shared by the gate and its collaborators.

use serde::{Deserialize, Serialize};

/// Index underlying identifier (e.g. NIFTY, BANKNIFTY).
#[derive(Debug, Clone, PartialEq, Eq, std::hash::Hash, Serialize, Deserialize)]
pub struct Instrument {
    pub symbol: String,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.symbol
    }
}

/// One closed OHLCV candle. Feeds deliver these oldest→newest; the last
/// element of a window is the most recently closed candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub ts_ms: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// True range against the previous close (Wilder).
    pub fn true_range(&self, prev_close: f64) -> f64 {
        let hl = self.high - self.low;
        let hc = (self.high - prev_close).abs();
        let lc = (self.low - prev_close).abs();
        hl.max(hc).max(lc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(high: f64, low: f64, close: f64) -> Candle {
        Candle {
            ts_ms: 0,
            open: low,
            high,
            low,
            close,
            volume: 0.0,
        }
    }

    #[test]
    fn true_range_covers_gaps() {
        // Gap up: previous close far below today's range.
        let c = candle(110.0, 105.0, 108.0);
        assert_eq!(c.true_range(100.0), 10.0);

        // Gap down: previous close far above.
        let c = candle(95.0, 90.0, 92.0);
        assert_eq!(c.true_range(100.0), 10.0);

        // No gap: plain high-low.
        let c = candle(102.0, 98.0, 100.0);
        assert_eq!(c.true_range(100.0), 4.0);
    }
}
