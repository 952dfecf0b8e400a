// ABOUTME: Prune-delta reconciliation: which images vanished, and how much
// ABOUTME: space that reclaimed, cross-checked against the engine's figure.

use crate::types::{ImageInventory, PruneOutcome};

/// Disagreement between the per-image sum and the engine's aggregate figure
/// below this many bytes is treated as rounding/metadata noise and the
/// per-image sum wins.
pub const RECLAIM_TOLERANCE_BYTES: u64 = 100;

/// One removed image: display label plus the size it was last seen with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalEntry {
    pub label: String,
    pub size: Option<u64>,
}

/// The authoritative removal list and reclaimed total for one run.
///
/// Entries are sorted ascending by label so the rendered report is
/// deterministic. Built once per run and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    pub entries: Vec<RemovalEntry>,
    pub total_reclaimed: u64,
}

impl ReconciliationResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reconcile two inventory snapshots against the engine's prune report.
///
/// The snapshot delta is the source of truth for *which* images were removed:
/// every identity present before and gone after counts, whether or not the
/// engine's own deleted-list agrees. The engine's aggregate figure is the
/// source of truth for *how much* space only when it materially disagrees
/// with the per-image sum, since shared layers reclaimed by the engine are
/// invisible to the per-image view.
///
/// A failed prune, or a missing after-snapshot, yields an empty result: no
/// removal evidence exists. Never fails.
pub fn reconcile(
    before: &ImageInventory,
    after: Option<&ImageInventory>,
    outcome: &PruneOutcome,
) -> ReconciliationResult {
    let (Some(after), PruneOutcome::Success { .. }) = (after, outcome) else {
        return ReconciliationResult::default();
    };

    let mut entries = Vec::new();
    let mut summed: u64 = 0;
    for record in before.records() {
        if after.contains(record.id()) {
            continue;
        }
        summed += record.size().unwrap_or(0);
        entries.push(RemovalEntry {
            label: record.label(),
            size: record.size(),
        });
    }
    entries.sort_by(|a, b| a.label.cmp(&b.label));

    let reported = outcome.space_reclaimed();
    let total_reclaimed =
        if reported > 0 && (summed == 0 || reported.abs_diff(summed) > RECLAIM_TOLERANCE_BYTES) {
            tracing::info!(reported, summed, "using engine-reported reclaimed space");
            reported
        } else {
            summed
        };

    ReconciliationResult {
        entries,
        total_reclaimed,
    }
}
