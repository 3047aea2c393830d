//! Data models for sync offset calculation.
//!
//! - [`VideoEntry`]: one user-entered video (name plus raw timestamp strings).
//! - [`SyncResult`] / [`SyncReport`]: derived per-video offsets, rebuilt from
//!   scratch on every computation and never mutated in place.

mod entry;
mod report;

pub use entry::VideoEntry;
pub use report::{SyncReport, SyncResult};
