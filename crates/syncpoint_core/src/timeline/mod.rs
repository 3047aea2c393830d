//! Proportional timeline layout.
//!
//! Turns a [`SyncReport`] into percentage-based bar geometry a front end
//! can render directly (HTML widths, terminal columns, anything that
//! scales). The shared timeline spans from the earliest start to the
//! latest end across all videos; each bar's left edge and width are
//! expressed as percentages of that span.
//!
//! The sync marker is the single vertical line where every video's sync
//! point coincides. It sits at the reference's sync point, since the
//! reference starts at 0.

use serde::{Deserialize, Serialize};

use crate::models::SyncReport;

/// Geometry for one video's bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBar {
    /// Id of the entry this bar belongs to.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Whether this bar is the reference video.
    pub is_reference: bool,
    /// Start position in seconds, for labelling.
    pub start_secs: i64,
    /// Left edge as a percentage of the timeline span.
    pub left_pct: f64,
    /// Width as a percentage of the timeline span.
    pub width_pct: f64,
}

/// Complete timeline geometry for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// Earliest start across all videos, in seconds.
    pub min_start_secs: i64,
    /// Latest end across all videos, in seconds.
    pub max_end_secs: i64,
    /// Total span of the timeline, in seconds.
    pub range_secs: i64,
    /// Position of the shared sync point, as a percentage of the span.
    pub sync_marker_pct: f64,
    /// One bar per video, in report order.
    pub bars: Vec<TimelineBar>,
}

/// Compute bar geometry for every video in the report.
pub fn layout(report: &SyncReport) -> TimelineLayout {
    let min_start_secs = report
        .results
        .iter()
        .map(|r| r.start_secs)
        .min()
        .unwrap_or(0);
    let max_end_secs = report
        .results
        .iter()
        .map(|r| r.end_secs())
        .max()
        .unwrap_or(0);
    let range_secs = max_end_secs - min_start_secs;

    // A span of zero seconds has no geometry to distribute.
    if range_secs <= 0 {
        let bars = report
            .results
            .iter()
            .map(|result| TimelineBar {
                id: result.id,
                name: result.name.clone(),
                is_reference: result.is_reference,
                start_secs: result.start_secs,
                left_pct: 0.0,
                width_pct: 0.0,
            })
            .collect();
        return TimelineLayout {
            min_start_secs,
            max_end_secs,
            range_secs: 0,
            sync_marker_pct: 0.0,
            bars,
        };
    }

    let range = range_secs as f64;
    let bars = report
        .results
        .iter()
        .map(|result| {
            let start_pct = (result.start_secs - min_start_secs) as f64 / range * 100.0;
            let left_pct = start_pct.max(0.0);
            let width_pct =
                (result.duration_secs as f64 / range * 100.0).min(100.0 - left_pct);
            TimelineBar {
                id: result.id,
                name: result.name.clone(),
                is_reference: result.is_reference,
                start_secs: result.start_secs,
                left_pct,
                width_pct,
            }
        })
        .collect();

    let sync_marker_pct =
        (report.reference.sync_point_secs - min_start_secs) as f64 / range * 100.0;

    TimelineLayout {
        min_start_secs,
        max_end_secs,
        range_secs,
        sync_marker_pct,
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoEntry;
    use crate::sync;

    const EPS: f64 = 1e-9;

    fn starter_report() -> SyncReport {
        let entries = vec![
            VideoEntry::new(1, "Video 1", "1:20:48", "11:38"),
            VideoEntry::new(2, "Video 2", "45:30", "9:50"),
            VideoEntry::new(3, "Video 3", "52:15", "8:57"),
        ];
        sync::compute(&entries).unwrap()
    }

    #[test]
    fn span_covers_earliest_start_to_latest_end() {
        let layout = layout(&starter_report());
        // Starts are [0, 108, 161]; the reference (4848s) runs longest.
        assert_eq!(layout.min_start_secs, 0);
        assert_eq!(layout.max_end_secs, 4848);
        assert_eq!(layout.range_secs, 4848);
    }

    #[test]
    fn reference_bar_fills_the_span() {
        let layout = layout(&starter_report());
        let reference = &layout.bars[0];
        assert!(reference.is_reference);
        assert!((reference.left_pct - 0.0).abs() < EPS);
        assert!((reference.width_pct - 100.0).abs() < EPS);
    }

    #[test]
    fn bar_geometry_is_proportional() {
        let layout = layout(&starter_report());
        let bar = &layout.bars[1];
        assert!((bar.left_pct - 108.0 / 4848.0 * 100.0).abs() < EPS);
        assert!((bar.width_pct - 2730.0 / 4848.0 * 100.0).abs() < EPS);
    }

    #[test]
    fn bars_never_overflow_the_span() {
        let layout = layout(&starter_report());
        for bar in &layout.bars {
            assert!(bar.left_pct >= 0.0);
            assert!(bar.left_pct + bar.width_pct <= 100.0 + EPS, "{}", bar.name);
        }
    }

    #[test]
    fn sync_marker_at_reference_sync_point() {
        let layout = layout(&starter_report());
        assert!((layout.sync_marker_pct - 698.0 / 4848.0 * 100.0).abs() < EPS);
    }

    #[test]
    fn negative_start_shifts_the_span() {
        // The second video's sync point is later than the reference's,
        // so it starts 65s before the shared origin.
        let entries = vec![
            VideoEntry::new(1, "Ref", "2:00:00", "5:00"),
            VideoEntry::new(2, "Late", "30:00", "6:05"),
        ];
        let report = sync::compute(&entries).unwrap();
        let layout = layout(&report);

        assert_eq!(layout.min_start_secs, -65);
        assert_eq!(layout.max_end_secs, 7200);
        assert_eq!(layout.range_secs, 7265);

        assert!((layout.bars[1].left_pct - 0.0).abs() < EPS);
        assert!((layout.bars[0].left_pct - 65.0 / 7265.0 * 100.0).abs() < EPS);
        assert!((layout.sync_marker_pct - 365.0 / 7265.0 * 100.0).abs() < EPS);
    }

    #[test]
    fn zero_range_yields_empty_geometry() {
        let entries = vec![VideoEntry::new(1, "Empty", "0:00", "0:00")];
        let report = sync::compute(&entries).unwrap();
        let layout = layout(&report);

        assert_eq!(layout.range_secs, 0);
        assert!((layout.sync_marker_pct - 0.0).abs() < EPS);
        assert!((layout.bars[0].left_pct - 0.0).abs() < EPS);
        assert!((layout.bars[0].width_pct - 0.0).abs() < EPS);
    }
}
