//! Indicator series consumed by the gate.
//!
//! The gate does not compute EMA/RSI — those arrive from an external
//! indicator engine as index-aligned arrays (one value per candle). This
//! module owns:
//!   • the series container and its alignment/emptiness checks
//!   • extraction of the last-candle snapshot the gate evaluates on
//!   • a Wilder ATR fallback for engines that do not supply ATR
//!
//! ## Safety rule
//! A snapshot is only produced from non-empty, aligned series. Missing or
//! misaligned data must surface as an error here so the gate can reject the
//! candidate for data insufficiency — it must never default to values that
//! could pass a threshold check.

use serde::{Deserialize, Serialize};

use crate::types::Candle;

/// Index-aligned indicator arrays for one candle window.
///
/// `atr` is optional: engines that price ATR themselves supply it, otherwise
/// the gate derives it from the candles (see [`wilder_atr`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub ema20: Vec<f64>,
    pub ema50: Vec<f64>,
    pub rsi: Vec<f64>,
    pub atr: Option<Vec<f64>>,
}

/// Last-closed-candle view of one timeframe: everything the classifier and
/// the numeric gates read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeframeSnapshot {
    pub close: f64,
    pub ema20: f64,
    pub ema50: f64,
    pub rsi: f64,
    pub atr: f64,
}

impl IndicatorSeries {
    /// Extract the snapshot at the most recent closed candle.
    ///
    /// `atr_period` is only used when the series carries no ATR array and
    /// the fallback computation runs over `candles`.
    pub fn snapshot(&self, candles: &[Candle], atr_period: usize) -> anyhow::Result<TimeframeSnapshot> {
        let close = candles
            .last()
            .map(|c| c.close)
            .ok_or_else(|| anyhow::anyhow!("empty candle window"))?;

        if self.ema20.len() != candles.len()
            || self.ema50.len() != candles.len()
            || self.rsi.len() != candles.len()
        {
            anyhow::bail!(
                "indicator series misaligned: candles={} ema20={} ema50={} rsi={}",
                candles.len(),
                self.ema20.len(),
                self.ema50.len(),
                self.rsi.len()
            );
        }

        let ema20 = *self.ema20.last().expect("non-empty by alignment check");
        let ema50 = *self.ema50.last().expect("non-empty by alignment check");
        let rsi = *self.rsi.last().expect("non-empty by alignment check");

        let atr = match &self.atr {
            Some(series) => {
                if series.len() != candles.len() {
                    anyhow::bail!(
                        "ATR series misaligned: candles={} atr={}",
                        candles.len(),
                        series.len()
                    );
                }
                *series.last().expect("non-empty by alignment check")
            }
            None => wilder_atr(candles, atr_period)
                .ok_or_else(|| anyhow::anyhow!("not enough candles for ATR({})", atr_period))?,
        };

        if !(atr.is_finite() && atr > 0.0) {
            anyhow::bail!("degenerate ATR value: {}", atr);
        }

        Ok(TimeframeSnapshot {
            close,
            ema20,
            ema50,
            rsi,
            atr,
        })
    }
}

/// Wilder-smoothed Average True Range over the given period.
///
/// Seeds with the arithmetic mean of the first `period` true ranges, then
/// smooths with factor `1/period`. Returns `None` when fewer than
/// `period + 1` candles are available.
pub fn wilder_atr(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let true_ranges: Vec<f64> = candles
        .windows(2)
        .map(|w| w[1].true_range(w[0].close))
        .collect();

    let mut atr = true_ranges[..period].iter().sum::<f64>() / period as f64;

    for tr in &true_ranges[period..] {
        atr = (atr * (period as f64 - 1.0) + tr) / period as f64;
    }

    Some(atr)
}
