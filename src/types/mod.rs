// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Uses phantom types to prevent ID confusion at compile time.

mod id;
mod image;
mod prune;

pub use id::{ChatId, ImageId};
pub use image::{ImageInventory, ImageRecord};
pub use prune::PruneOutcome;
