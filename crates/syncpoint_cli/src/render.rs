//! Text rendering of sync reports and timelines.
//!
//! All numbers go through the core's formatting helpers; this module only
//! arranges them into columns and bars.

use syncpoint_core::models::{SyncReport, SyncResult};
use syncpoint_core::timecode;
use syncpoint_core::timeline::TimelineLayout;

/// Render the reference banner and the per-video results table.
pub fn render_report(report: &SyncReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Reference: {} (longest duration: {})\n\n",
        report.reference.name,
        timecode::format(report.reference.duration_secs)
    ));

    let name_width = report
        .results
        .iter()
        .map(|r| display_name(r).len())
        .chain(["Video".len()])
        .max()
        .unwrap_or(5);

    out.push_str(&format!(
        "{:<name_width$}  {:>8}  {:>10}  {:<14}  {:>10}\n",
        "Video", "Duration", "Sync Point", "Offset", "Start Time"
    ));
    for result in &report.results {
        out.push_str(&format!(
            "{:<name_width$}  {:>8}  {:>10}  {:<14}  {:>10}\n",
            display_name(result),
            timecode::format(result.duration_secs),
            timecode::format(result.sync_point_secs),
            offset_label(result.offset_secs),
            start_label(result.start_secs),
        ));
    }

    out
}

/// Render the proportional timeline as rows of bar characters.
///
/// The reference bar uses `#`, other bars `=`, and the shared sync point
/// is overlaid as `|` on every row.
pub fn render_timeline(layout: &TimelineLayout, width: usize) -> String {
    let width = width.max(16);
    let mut out = String::new();

    out.push_str(&format!(
        "Timeline: {} total ({} to {})\n",
        timecode::format(layout.range_secs),
        timecode::format(layout.min_start_secs),
        timecode::format(layout.max_end_secs)
    ));

    let name_width = layout
        .bars
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(0);
    let marker_col = pct_to_col(layout.sync_marker_pct, width).min(width.saturating_sub(1));

    for bar in &layout.bars {
        let start_col = pct_to_col(bar.left_pct, width);
        let mut end_col = pct_to_col(bar.left_pct + bar.width_pct, width);
        if bar.width_pct > 0.0 && end_col <= start_col {
            // A sliver of a bar still deserves one visible cell.
            end_col = (start_col + 1).min(width);
        }

        let fill = if bar.is_reference { '#' } else { '=' };
        let mut row = vec![' '; width];
        for cell in row.iter_mut().take(end_col).skip(start_col) {
            *cell = fill;
        }
        row[marker_col] = '|';

        out.push_str(&format!(
            "{:<name_width$}  [{}]  start {}\n",
            bar.name,
            row.into_iter().collect::<String>(),
            start_label(bar.start_secs),
        ));
    }

    out.push_str(&format!(
        "{:<name_width$}  {}\n",
        "", "# reference   = other   | sync point"
    ));

    out
}

fn display_name(result: &SyncResult) -> String {
    if result.is_reference {
        format!("{} [reference]", result.name)
    } else {
        result.name.clone()
    }
}

fn offset_label(offset_secs: i64) -> String {
    if offset_secs == 0 {
        "0s (reference)".to_string()
    } else {
        timecode::format_offset(offset_secs)
    }
}

fn start_label(start_secs: i64) -> String {
    if start_secs == 0 {
        "0:00".to_string()
    } else {
        timecode::format(start_secs)
    }
}

fn pct_to_col(pct: f64, width: usize) -> usize {
    ((pct / 100.0 * width as f64).round() as usize).min(width)
}
