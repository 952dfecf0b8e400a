// ABOUTME: Renders reconciliation output into the operator-facing message.
// ABOUTME: Telegram Markdown, deterministic given a timestamp and inputs.

use super::format::format_bytes;
use super::reconcile::ReconciliationResult;
use crate::types::PruneOutcome;
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Render the cleanup report for one completed run.
///
/// Always returns a well-formed message; the only non-determinism is the
/// timestamp, which the caller supplies.
pub fn render_report(
    now: DateTime<Local>,
    outcome: &PruneOutcome,
    result: &ReconciliationResult,
) -> String {
    let mut message = format!(
        "*Image cleanup report - {}*\n\n",
        now.format("%Y-%m-%d %H:%M:%S")
    );

    match outcome {
        PruneOutcome::Success { .. } => {
            message.push_str("Status: ✅ Cleanup succeeded\n");
        }
        PruneOutcome::Failure { error } => {
            message.push_str("Status: ❌ Cleanup failed\n");
            if error.is_empty() {
                message.push_str("Error details: unknown error, check the logs\n");
            } else {
                let _ = writeln!(message, "Error details:\n`{error}`");
            }
        }
    }

    if !result.is_empty() {
        let _ = writeln!(message, "Removed images ({}):", result.entries.len());
        for entry in &result.entries {
            let _ = writeln!(message, "• {} ({})", entry.label, format_bytes(entry.size));
        }
        let _ = write!(
            message,
            "\n*Total space reclaimed:* {}\n",
            format_bytes(Some(result.total_reclaimed))
        );
    } else {
        message.push_str("No images qualified for removal.\n");
        let reported = outcome.space_reclaimed();
        if reported > 0 {
            let _ = write!(
                message,
                "Engine reported total space reclaimed: {}",
                format_bytes(Some(reported))
            );
        }
    }

    message
}

/// Render the notification for a fatal failure that aborted the run before
/// any report could be produced (cannot connect, cannot list images).
pub fn render_fatal(now: DateTime<Local>, reason: &str, error: &dyn std::error::Error) -> String {
    format!(
        "*Image cleanup failed - {}*\n\nStatus: ❌ Failed\nReason: {reason}.\n`{error}`",
        now.format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::reconcile::RemovalEntry;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 27, 3, 15, 0).unwrap()
    }

    fn success(space_reclaimed: u64) -> PruneOutcome {
        PruneOutcome::Success {
            space_reclaimed,
            deleted_ids: HashSet::new(),
        }
    }

    #[test]
    fn success_report_lists_entries_and_bold_total() {
        let result = ReconciliationResult {
            entries: vec![
                RemovalEntry {
                    label: "a:latest".to_string(),
                    size: Some(100),
                },
                RemovalEntry {
                    label: "b:latest".to_string(),
                    size: None,
                },
            ],
            total_reclaimed: 100,
        };

        let message = render_report(fixed_now(), &success(100), &result);

        assert!(message.contains("2026-08-27 03:15:00"));
        assert!(message.contains("Status: ✅ Cleanup succeeded"));
        assert!(message.contains("Removed images (2):"));
        assert!(message.contains("• a:latest (100.00 B)"));
        assert!(message.contains("• b:latest (N/A)"));
        assert!(message.contains("*Total space reclaimed:* 100.00 B"));
    }

    #[test]
    fn failure_report_carries_error_verbatim_without_bullets() {
        let outcome = PruneOutcome::Failure {
            error: "disk busy".to_string(),
        };

        let message = render_report(fixed_now(), &outcome, &ReconciliationResult::default());

        assert!(message.contains("Status: ❌ Cleanup failed"));
        assert!(message.contains("`disk busy`"));
        assert!(!message.contains("• "));
    }

    #[test]
    fn failure_without_message_points_at_the_logs() {
        let outcome = PruneOutcome::Failure {
            error: String::new(),
        };

        let message = render_report(fixed_now(), &outcome, &ReconciliationResult::default());

        assert!(message.contains("unknown error, check the logs"));
    }

    #[test]
    fn empty_success_states_nothing_qualified() {
        let message = render_report(fixed_now(), &success(0), &ReconciliationResult::default());

        assert!(message.contains("No images qualified for removal."));
        assert!(!message.contains("Engine reported"));
    }

    #[test]
    fn empty_success_with_positive_aggregate_shows_supplementary_figure() {
        // Metadata-only reclamation: no whole image vanished but the engine
        // still reports reclaimed space.
        let message = render_report(fixed_now(), &success(2048), &ReconciliationResult::default());

        assert!(message.contains("No images qualified for removal."));
        assert!(message.contains("Engine reported total space reclaimed: 2.00 KB"));
    }

    #[test]
    fn fatal_message_includes_reason_and_error() {
        let err = std::io::Error::other("socket vanished");
        let message = render_fatal(fixed_now(), "cannot connect to the container engine", &err);

        assert!(message.contains("*Image cleanup failed - 2026-08-27 03:15:00*"));
        assert!(message.contains("Reason: cannot connect to the container engine."));
        assert!(message.contains("`socket vanished`"));
    }
}
