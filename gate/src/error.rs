//! Gate error taxonomy.
//!
//! Infrastructure faults are distinct from business rejections: a failing
//! collaborator surfaces as `Err(GateError)` to the caller, never as a
//! REJECT verdict. Callers treat a `GateError` as "system fault, retry or
//! alert" — conflating it with "no trade" would hide outages behind
//! apparently clean rejections.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("market data provider failure: {0:#}")]
    MarketData(anyhow::Error),

    #[error("indicator engine failure: {0:#}")]
    IndicatorEngine(anyhow::Error),
}
