//! Event filter: scheduled no-trade windows.
//!
//! Inside a configured window the check fails; within the warn margin
//! ahead of one it warns (recorded in the trail, does not change the final
//! state). The default calendar is empty, which makes this a pass-through.

use crate::config::EventWindow;
use crate::outcome::ValidationResult;

pub fn check_event_filter(
    now_ms: u64,
    windows: &[EventWindow],
    warn_margin_ms: u64,
) -> ValidationResult {
    for w in windows {
        if now_ms >= w.start_ms && now_ms <= w.end_ms {
            return ValidationResult::fail(format!(
                "inside event window '{}' ({}s remaining)",
                w.label,
                (w.end_ms.saturating_sub(now_ms)) / 1000
            ));
        }
    }

    for w in windows {
        if now_ms < w.start_ms && w.start_ms - now_ms <= warn_margin_ms {
            return ValidationResult::warn(format!(
                "event window '{}' starts in {}s",
                w.label,
                (w.start_ms - now_ms) / 1000
            ));
        }
    }

    ValidationResult::pass("no event window active")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::GateStatus;

    fn window(label: &str, start_ms: u64, end_ms: u64) -> EventWindow {
        EventWindow {
            label: label.to_string(),
            start_ms,
            end_ms,
        }
    }

    #[test]
    fn empty_calendar_passes() {
        let r = check_event_filter(1_000_000, &[], 900_000);
        assert_eq!(r.status, GateStatus::Pass);
    }

    #[test]
    fn inside_a_window_fails() {
        let windows = vec![window("RBI policy", 1_000_000, 2_000_000)];
        let r = check_event_filter(1_500_000, &windows, 900_000);
        assert_eq!(r.status, GateStatus::Fail);
        assert!(r.reasons[0].contains("RBI policy"));
    }

    #[test]
    fn approaching_window_warns() {
        let windows = vec![window("CPI print", 2_000_000, 3_000_000)];
        let r = check_event_filter(1_400_000, &windows, 900_000);
        assert_eq!(r.status, GateStatus::Warn);
        assert!(r.reasons[0].contains("starts in 600s"));
    }

    #[test]
    fn distant_window_passes() {
        let windows = vec![window("CPI print", 10_000_000, 11_000_000)];
        let r = check_event_filter(1_000_000, &windows, 900_000);
        assert_eq!(r.status, GateStatus::Pass);
    }

    #[test]
    fn window_edges_are_inclusive() {
        let windows = vec![window("expiry", 1_000_000, 2_000_000)];
        assert_eq!(
            check_event_filter(1_000_000, &windows, 0).status,
            GateStatus::Fail
        );
        assert_eq!(
            check_event_filter(2_000_000, &windows, 0).status,
            GateStatus::Fail
        );
    }
}
