//! Deterministic validation gate for short-horizon index option candidates.
//!
//! Given a raw candidate (spot, proposed strike/premium, stop-loss, targets,
//! timeframe pair) the gate decides whether the trade is executable as
//! proposed (PASSED), executable after a bounded auditable correction
//! (REWRITE), or not executable (REJECTED) — independently per derived side
//! (CALL/PUT) when market structure is ambiguous.
//!
//! The gate consumes indicator series and emits structured decisions; it
//! owns none of the I/O. Same candidate + same market inputs + same clock
//! reading always produce byte-identical decisions.

pub mod checks;
pub mod classify;
pub mod clock;
pub mod config;
pub mod economics;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod payload;
pub mod rate_limit;
pub mod signal;
