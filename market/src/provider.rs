//! Collaborator seams: where candles and indicator arrays come from.
//!
//! The gate owns none of the I/O. Live feeds, historical stores and test
//! stubs all sit behind `MarketData`; the indicator math library sits
//! behind `IndicatorEngine`. Provider failures are infrastructure faults —
//! callers propagate them, they are never turned into trade rejections.

use async_trait::async_trait;

use crate::indicators::IndicatorSeries;
use crate::timeframe::Timeframe;
use crate::types::{Candle, Instrument};

/// Source of recent closed candles for one instrument/timeframe.
///
/// Contract: candles are ordered oldest→newest and the last element is the
/// most recently closed candle. Implementations decide their own timeout
/// policy; the gate imposes none.
#[async_trait]
pub trait MarketData: Send + Sync {
    async fn latest_candles(
        &self,
        instrument: &Instrument,
        timeframe: Timeframe,
    ) -> anyhow::Result<Vec<Candle>>;
}

/// External indicator engine: turns a candle window into index-aligned
/// EMA20/EMA50/RSI arrays (and optionally ATR).
///
/// Pure math, so the trait is synchronous; an engine backed by a service
/// would pre-compute and cache.
pub trait IndicatorEngine: Send + Sync {
    fn calculate(&self, candles: &[Candle]) -> anyhow::Result<IndicatorSeries>;
}
