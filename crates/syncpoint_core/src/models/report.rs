//! Derived sync results.

use serde::{Deserialize, Serialize};

/// Computed sync data for one video.
///
/// `start_secs` equals `offset_secs`: the reference's sync point is the
/// common timeline anchor, and each video starts wherever that shift puts
/// it. Both fields exist because they answer different questions when
/// displayed ("how far to shift" vs "where on the timeline").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    /// Id of the entry this result was derived from.
    pub id: u64,
    /// Display name, copied from the entry.
    pub name: String,
    /// Parsed duration in seconds.
    pub duration_secs: i64,
    /// Parsed sync point in seconds.
    pub sync_point_secs: i64,
    /// True for exactly one result per report: the longest video.
    pub is_reference: bool,
    /// Signed shift relative to the reference's sync point.
    pub offset_secs: i64,
    /// Position of this video's start on the shared timeline.
    pub start_secs: i64,
}

impl SyncResult {
    /// End position of this video on the shared timeline.
    pub fn end_secs(&self) -> i64 {
        self.start_secs + self.duration_secs
    }
}

/// Full output of a sync computation.
///
/// `results` preserves the input order. `reference` is a copy of the
/// winning result so callers can read it without searching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Per-video results, one per input entry, in input order.
    pub results: Vec<SyncResult>,
    /// The reference video's result (also present in `results`).
    pub reference: SyncResult,
}
