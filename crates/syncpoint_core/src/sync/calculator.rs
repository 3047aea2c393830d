//! Centralized offset calculation logic.
//!
//! All offset math happens here - no scattered sync-point arithmetic
//! elsewhere.
//!
//! # Offset Calculation Rules
//!
//! - The **reference** is the video with the greatest parsed duration.
//!   When several tie for the maximum, the first one in input order wins
//!   (stable left-to-right scan).
//!
//! - Every video's offset is measured against the reference's sync point:
//!
//!   ```text
//!   offset = reference.sync_point_secs - video.sync_point_secs
//!   start  = offset
//!   ```
//!
//!   The reference's sync point is the common timeline anchor, so the
//!   reference itself always lands at offset 0. A positive offset means
//!   the video's sync point happens earlier in its own timeline than the
//!   reference's does, so the video starts later on the shared timeline.
//!
//! # Parsing Policy
//!
//! [`compute`] parses leniently: malformed timestamps degrade to zero
//! seconds and the computation always succeeds for a non-empty input.
//! [`compute_strict`] instead refuses to compute and reports which video
//! and which field is malformed. Dropping the bad entry was rejected as an
//! option because it could silently change which video is the reference.

use thiserror::Error;

use crate::models::{SyncReport, SyncResult, VideoEntry};
use crate::timecode::{self, TimecodeError};

/// Which timestamp field of an entry is being reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    Duration,
    SyncPoint,
}

impl std::fmt::Display for TimestampField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimestampField::Duration => write!(f, "duration"),
            TimestampField::SyncPoint => write!(f, "sync point"),
        }
    }
}

/// Errors that can occur during offset calculation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The entry list was empty.
    #[error("no videos to compute offsets for")]
    NoEntries,

    /// A timestamp failed strict parsing.
    #[error("invalid {field} for '{video}': {source}")]
    InvalidTimestamp {
        video: String,
        field: TimestampField,
        #[source]
        source: TimecodeError,
    },
}

/// Compute offsets for every entry, parsing timestamps leniently.
///
/// Malformed duration or sync-point strings are treated as `0:00`.
/// The only failure is an empty entry list.
pub fn compute(entries: &[VideoEntry]) -> Result<SyncReport, SyncError> {
    let parsed = entries
        .iter()
        .map(|entry| {
            (
                timecode::parse_lenient(&entry.duration),
                timecode::parse_lenient(&entry.sync_point),
            )
        })
        .collect();
    build_report(entries, parsed)
}

/// Compute offsets for every entry, rejecting malformed timestamps.
///
/// The first malformed field aborts the whole computation with an error
/// naming the video and the field.
pub fn compute_strict(entries: &[VideoEntry]) -> Result<SyncReport, SyncError> {
    let mut parsed = Vec::with_capacity(entries.len());
    for entry in entries {
        let duration = timecode::parse(&entry.duration).map_err(|source| {
            SyncError::InvalidTimestamp {
                video: entry.name.clone(),
                field: TimestampField::Duration,
                source,
            }
        })?;
        let sync_point = timecode::parse(&entry.sync_point).map_err(|source| {
            SyncError::InvalidTimestamp {
                video: entry.name.clone(),
                field: TimestampField::SyncPoint,
                source,
            }
        })?;
        parsed.push((duration, sync_point));
    }
    build_report(entries, parsed)
}

/// Select the reference and assemble the report from parsed seconds.
fn build_report(
    entries: &[VideoEntry],
    parsed: Vec<(i64, i64)>,
) -> Result<SyncReport, SyncError> {
    if entries.is_empty() {
        return Err(SyncError::NoEntries);
    }

    // Strictly-greater comparison keeps the first of tied maxima.
    let mut reference_idx = 0;
    for (i, &(duration_secs, _)) in parsed.iter().enumerate() {
        if duration_secs > parsed[reference_idx].0 {
            reference_idx = i;
        }
    }
    let reference_sync = parsed[reference_idx].1;

    let results: Vec<SyncResult> = entries
        .iter()
        .zip(&parsed)
        .enumerate()
        .map(|(i, (entry, &(duration_secs, sync_point_secs)))| {
            let offset_secs = reference_sync - sync_point_secs;
            SyncResult {
                id: entry.id,
                name: entry.name.clone(),
                duration_secs,
                sync_point_secs,
                is_reference: i == reference_idx,
                offset_secs,
                start_secs: offset_secs,
            }
        })
        .collect();

    let reference = results[reference_idx].clone();
    tracing::debug!(
        "reference '{}' ({}s) selected over {} video(s)",
        reference.name,
        reference.duration_secs,
        results.len()
    );

    Ok(SyncReport { results, reference })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, name: &str, duration: &str, sync_point: &str) -> VideoEntry {
        VideoEntry::new(id, name, duration, sync_point)
    }

    fn starter_entries() -> Vec<VideoEntry> {
        vec![
            entry(1, "Video 1", "1:20:48", "11:38"),
            entry(2, "Video 2", "45:30", "9:50"),
            entry(3, "Video 3", "52:15", "8:57"),
        ]
    }

    #[test]
    fn longest_duration_wins_regardless_of_order() {
        let mut entries = starter_entries();
        let report = compute(&entries).unwrap();
        assert_eq!(report.reference.name, "Video 1");
        assert_eq!(report.reference.duration_secs, 4848);

        entries.rotate_left(1);
        let report = compute(&entries).unwrap();
        assert_eq!(report.reference.name, "Video 1");

        entries.rotate_left(1);
        let report = compute(&entries).unwrap();
        assert_eq!(report.reference.name, "Video 1");
    }

    #[test]
    fn tie_goes_to_first_in_input_order() {
        let entries = vec![
            entry(1, "A", "45:30", "1:00"),
            entry(2, "B", "45:30", "2:00"),
        ];
        let report = compute(&entries).unwrap();
        assert_eq!(report.reference.name, "A");
        assert!(report.results[0].is_reference);
        assert!(!report.results[1].is_reference);
    }

    #[test]
    fn exactly_one_reference() {
        let report = compute(&starter_entries()).unwrap();
        let count = report.results.iter().filter(|r| r.is_reference).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn reference_offset_is_zero() {
        let report = compute(&starter_entries()).unwrap();
        assert_eq!(report.reference.offset_secs, 0);
        assert_eq!(report.reference.start_secs, 0);
    }

    #[test]
    fn offsets_against_reference_sync_point() {
        // Reference sync point 11:38 = 698s, Video 2 at 9:50 = 590s.
        let report = compute(&starter_entries()).unwrap();
        assert_eq!(report.results[1].offset_secs, 108);
        assert_eq!(report.results[1].start_secs, 108);
    }

    #[test]
    fn full_starter_scenario() {
        let report = compute(&starter_entries()).unwrap();

        assert_eq!(report.reference.name, "Video 1");
        assert_eq!(report.reference.duration_secs, 4848);

        let offsets: Vec<i64> = report.results.iter().map(|r| r.offset_secs).collect();
        assert_eq!(offsets, vec![0, 108, 161]);
        for result in &report.results {
            assert_eq!(result.start_secs, result.offset_secs);
        }
    }

    #[test]
    fn output_order_matches_input_order() {
        let report = compute(&starter_entries()).unwrap();
        let ids: Vec<u64> = report.results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn negative_offset_when_sync_point_is_later() {
        let entries = vec![
            entry(1, "Ref", "2:00:00", "5:00"),
            entry(2, "Late", "30:00", "6:05"),
        ];
        let report = compute(&entries).unwrap();
        assert_eq!(report.results[1].offset_secs, -65);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(compute(&[]), Err(SyncError::NoEntries)));
        assert!(matches!(compute_strict(&[]), Err(SyncError::NoEntries)));
    }

    #[test]
    fn lenient_treats_malformed_sync_point_as_zero() {
        let entries = vec![
            entry(1, "Ref", "2:00:00", "5:00"),
            entry(2, "Broken", "30:00", "oops"),
        ];
        let report = compute(&entries).unwrap();
        // Broken parses as 0:00, so its offset is the full reference sync.
        assert_eq!(report.results[1].sync_point_secs, 0);
        assert_eq!(report.results[1].offset_secs, 300);
    }

    #[test]
    fn strict_names_video_and_field() {
        let entries = vec![
            entry(1, "Ref", "2:00:00", "5:00"),
            entry(2, "Broken", "30:00", "oops"),
        ];
        let err = compute_strict(&entries).unwrap_err();
        match err {
            SyncError::InvalidTimestamp { video, field, .. } => {
                assert_eq!(video, "Broken");
                assert_eq!(field, TimestampField::SyncPoint);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn strict_accepts_well_formed_input() {
        let report = compute_strict(&starter_entries()).unwrap();
        assert_eq!(report.reference.name, "Video 1");
    }
}
