// ABOUTME: Outcome of a prune operation as seen by the reporting core.
// ABOUTME: Success carries the engine's own aggregate accounting.

use std::collections::HashSet;

/// What the prune operation reported.
///
/// `Success` carries the engine's aggregate reclaimed-space figure and the
/// identities the engine claims to have deleted. The inventory delta, not
/// `deleted_ids`, decides which images count as removed; the engine's list is
/// kept for logging and diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    Success {
        space_reclaimed: u64,
        deleted_ids: HashSet<String>,
    },
    Failure {
        error: String,
    },
}

impl PruneOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, PruneOutcome::Success { .. })
    }

    /// The engine's aggregate reclaimed-space figure, zero on failure.
    pub fn space_reclaimed(&self) -> u64 {
        match self {
            PruneOutcome::Success {
                space_reclaimed, ..
            } => *space_reclaimed,
            PruneOutcome::Failure { .. } => 0,
        }
    }
}
