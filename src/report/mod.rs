// ABOUTME: The reporting core: size formatting, prune-delta reconciliation,
// ABOUTME: and report rendering. Pure logic, no I/O.

mod format;
mod reconcile;
mod render;

pub use format::format_bytes;
pub use reconcile::{RECLAIM_TOLERANCE_BYTES, ReconciliationResult, RemovalEntry, reconcile};
pub use render::{render_fatal, render_report};
