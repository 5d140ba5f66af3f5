//! The gate engine: one call in, zero/one/two side evaluations out.
//!
//! Each call is a single-threaded async pipeline: the candle fetches are
//! the only await points, everything after them is synchronous CPU-bound
//! evaluation. Concurrent calls for different keys are independent; the
//! only shared mutable state is the rate-limiter map, whose check-then-set
//! is atomic. There is no cancellation and no timeout here — timeout policy
//! belongs to the data provider.
//!
//! Sides are always evaluated CALL before PUT so array-index-based
//! assertions stay stable.

use std::sync::Arc;

use common::logger::{TraceId, child_span, evaluation_span};
use market::indicators::TimeframeSnapshot;
use market::provider::{IndicatorEngine, MarketData};
use tracing::{debug, info};

use crate::checks;
use crate::classify;
use crate::clock::Clock;
use crate::config::GateConfig;
use crate::economics::OptionEconomics;
use crate::error::GateError;
use crate::outcome::{GateName, SideEvaluation, SideStatus, ValidationResult, Validations, Verdict};
use crate::payload;
use crate::rate_limit::{RateKey, RateLimiter};
use crate::signal::{CandidateSignal, OptionSide};

pub struct ScalpGate<P, E> {
    provider: Arc<P>,
    indicators: Arc<E>,
    economics: Arc<dyn OptionEconomics>,
    limiter: Arc<RateLimiter>,
    clock: Arc<dyn Clock>,
    cfg: GateConfig,
}

impl<P: MarketData, E: IndicatorEngine> ScalpGate<P, E> {
    pub fn new(
        provider: Arc<P>,
        indicators: Arc<E>,
        economics: Arc<dyn OptionEconomics>,
        limiter: Arc<RateLimiter>,
        clock: Arc<dyn Clock>,
        cfg: GateConfig,
    ) -> Self {
        Self {
            provider,
            indicators,
            economics,
            limiter,
            clock,
            cfg,
        }
    }

    /// Validate one candidate.
    ///
    /// `Ok(Verdict::Rejected(..))` — input died before side generation.
    /// `Ok(Verdict::Evaluated(..))` — one evaluation per viable side.
    /// `Err(..)` — a collaborator failed; infrastructure fault, not a
    /// business rejection.
    pub async fn evaluate(&self, candidate: &CandidateSignal) -> Result<Verdict, GateError> {
        // Structural gate: a malformed candidate touches no market data.
        let issues = candidate.structural_issues();
        if !issues.is_empty() {
            debug!(instrument = %candidate.instrument.id(), ?issues, "structural rejection");
            return Ok(Verdict::Rejected(ValidationResult::fail_all(issues)));
        }

        let pair = candidate.timeframes;
        if !self.cfg.is_pair_allowed(&pair) {
            debug!(pair = %pair.id(), "timeframe rejection");
            return Ok(Verdict::rejected(format!(
                "invalid timeframe combination {}",
                pair.id()
            )));
        }

        // The only await points in the pipeline.
        let bias_candles = self
            .provider
            .latest_candles(&candidate.instrument, pair.bias)
            .await
            .map_err(GateError::MarketData)?;
        let entry_candles = self
            .provider
            .latest_candles(&candidate.instrument, pair.entry)
            .await
            .map_err(GateError::MarketData)?;

        let need = self.cfg.min_candles;
        if bias_candles.len() < need || entry_candles.len() < need {
            return Ok(Verdict::rejected(format!(
                "insufficient data: need {} candles per timeframe, got bias={} entry={}",
                need,
                bias_candles.len(),
                entry_candles.len()
            )));
        }

        let bias_series = self
            .indicators
            .calculate(&bias_candles)
            .map_err(GateError::IndicatorEngine)?;
        let entry_series = self
            .indicators
            .calculate(&entry_candles)
            .map_err(GateError::IndicatorEngine)?;

        let bias_snap = match bias_series.snapshot(&bias_candles, self.cfg.atr_period) {
            Ok(snap) => snap,
            Err(e) => return Ok(Verdict::rejected(format!("insufficient data: {e}"))),
        };
        let entry_snap = match entry_series.snapshot(&entry_candles, self.cfg.atr_period) {
            Ok(snap) => snap,
            Err(e) => return Ok(Verdict::rejected(format!("insufficient data: {e}"))),
        };

        // Purely synchronous from here on.
        let trace_id = TraceId::new();
        let span = evaluation_span(candidate.instrument.id(), &trace_id);
        let _guard = span.enter();

        let sides = classify::viable_sides(&entry_snap, &bias_snap, &self.cfg);
        if sides.is_empty() {
            info!("no directional edge");
            return Ok(Verdict::rejected("no directional edge"));
        }

        // One clock reading per call: both sides and the event filter see
        // the same instant.
        let now_ms = self.clock.now_ms();

        let evaluations: Vec<SideEvaluation> = sides
            .into_iter()
            .map(|side| self.evaluate_side(candidate, side, &entry_snap, &bias_snap, now_ms))
            .collect();

        for eval in &evaluations {
            info!(side = %eval.side, status = ?eval.status, "side verdict");
        }

        Ok(Verdict::Evaluated(evaluations))
    }

    fn evaluate_side(
        &self,
        candidate: &CandidateSignal,
        side: OptionSide,
        entry_snap: &TimeframeSnapshot,
        bias_snap: &TimeframeSnapshot,
        now_ms: u64,
    ) -> SideEvaluation {
        let cfg = &self.cfg;
        let mut validations = Validations::new();

        // Hard gate: the rate limiter short-circuits the side. Acceptance
        // stamps the key inside the same lock as the check.
        let key = RateKey {
            instrument: candidate.instrument.clone(),
            timeframe: candidate.timeframes.entry,
            side,
        };
        match self.limiter.try_acquire(key, now_ms) {
            Ok(()) => record(
                &mut validations,
                GateName::RateLimit,
                ValidationResult::pass("evaluation slot accepted"),
            ),
            Err(remaining_ms) => {
                record(
                    &mut validations,
                    GateName::RateLimit,
                    ValidationResult::fail(format!(
                        "rate limited: {}ms of cool-down remaining",
                        remaining_ms
                    )),
                );
                return SideEvaluation {
                    side,
                    status: SideStatus::Rejected,
                    validations,
                    final_payload: None,
                };
            }
        }

        // Soft gates: all of them run, all of them report.
        record(
            &mut validations,
            GateName::EntryTrigger,
            checks::entry::check_entry_trigger(side, entry_snap),
        );
        record(
            &mut validations,
            GateName::Structure,
            checks::structure::check_structure(side, bias_snap),
        );

        let rsi = classify::rsi_value(entry_snap, bias_snap, cfg);
        let band = match side {
            OptionSide::Call => cfg.rsi_bull,
            OptionSide::Put => cfg.rsi_bear,
        };
        record(
            &mut validations,
            GateName::Momentum,
            checks::momentum::check_momentum(side, rsi, band),
        );

        let target = candidate
            .primary_target()
            .expect("structural gate guarantees a target");
        let level_outcome = checks::levels::check_levels(
            side,
            candidate.spot,
            candidate.stop_loss,
            target,
            entry_snap.atr,
            cfg,
        );
        record(&mut validations, GateName::Levels, level_outcome.result.clone());

        let quote =
            self.economics
                .quote(&candidate.instrument, side, candidate.strike, candidate.spot);
        record(
            &mut validations,
            GateName::Tradability,
            checks::tradability::check_tradability(&quote, cfg),
        );

        match &level_outcome.levels {
            Some(levels) => record(
                &mut validations,
                GateName::PremiumRiskReward,
                checks::premium::check_premium_rr(
                    side,
                    &candidate.instrument,
                    candidate.strike,
                    candidate.spot,
                    levels,
                    self.economics.as_ref(),
                    cfg,
                ),
            ),
            None => record(
                &mut validations,
                GateName::PremiumRiskReward,
                ValidationResult::fail("premium risk-reward unavailable: level geometry invalid"),
            ),
        }

        record(
            &mut validations,
            GateName::EventFilter,
            checks::events::check_event_filter(now_ms, &cfg.event_windows, cfg.event_warn_margin_ms),
        );

        // Assemble: any FAIL rejects; an unrejected rescale is a REWRITE.
        let status = if validations.any_fail() {
            SideStatus::Rejected
        } else if level_outcome.rescaled {
            SideStatus::Rewrite
        } else {
            SideStatus::Passed
        };

        let final_payload = match (status, &level_outcome.levels) {
            (SideStatus::Rejected, _) | (_, None) => None,
            (_, Some(levels)) => Some(payload::build_payload(
                candidate, side, status, levels, &quote, entry_snap, &cfg.mode,
            )),
        };

        SideEvaluation {
            side,
            status,
            validations,
            final_payload,
        }
    }
}

fn record(validations: &mut Validations, gate: GateName, result: ValidationResult) {
    let _span = child_span(gate.as_str()).entered();
    debug!(status = ?result.status, reasons = ?result.reasons, "gate check");
    validations.push(gate, result);
}
