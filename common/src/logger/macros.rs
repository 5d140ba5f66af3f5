use super::TraceId;
use tracing::{Level, Span};

/// Root span for a single gate evaluation.
pub fn evaluation_span(instrument: &str, trace_id: &TraceId) -> Span {
    tracing::span!(
        Level::INFO,
        "evaluate",
        instrument,
        trace_id = %trace_id.as_str()
    )
}

/// Child span for one gate check (inherits trace_id automatically).
pub fn child_span(gate: &'static str) -> Span {
    tracing::span!(Level::DEBUG, "gate_check", gate)
}
