//! Syncpoint CLI
//!
//! Takes a set of videos (duration plus sync point each), computes how
//! each one's start must be shifted so all sync points align, and renders
//! the result as a table and a proportional text timeline.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use syncpoint_core::config::{ConfigManager, Settings};
use syncpoint_core::entries::EntryList;
use syncpoint_core::logging::{init_tracing, LogLevel};
use syncpoint_core::models::VideoEntry;
use syncpoint_core::{sync, timeline};

mod render;

#[derive(Parser)]
#[command(name = "syncpoint")]
#[command(about = "Align multiple recordings of the same event on one timeline")]
#[command(version)]
struct Cli {
    /// Video spec as NAME,DURATION,SYNC_POINT (repeatable).
    /// Timestamps are M:S or H:M:S. With no specs, a demo set is used.
    #[arg(long = "video", value_name = "NAME,DURATION,SYNC")]
    video: Vec<String>,

    /// Append N entries with the configured default timestamps
    #[arg(long, value_name = "N", default_value = "0")]
    add: u32,

    /// Reject malformed timestamps instead of treating them as 0:00
    #[arg(long)]
    strict: bool,

    /// Emit the report and timeline as JSON
    #[arg(long)]
    json: bool,

    /// Timeline width in columns (overrides settings)
    #[arg(long, value_name = "COLS")]
    timeline_width: Option<u32>,

    /// Settings file (created with defaults if missing)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref())?;

    let level = match cli.verbose {
        0 => settings.logging.level,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    };
    init_tracing(level);

    let mut list = build_list(&cli.video)?;
    for _ in 0..cli.add {
        list.add(
            &settings.defaults.name_prefix,
            &settings.defaults.duration,
            &settings.defaults.sync_point,
        );
    }
    tracing::debug!("computing offsets for {} video(s)", list.len());

    let strict = cli.strict || settings.display.strict_timestamps;
    let report = if strict {
        sync::compute_strict(list.entries())
    } else {
        sync::compute(list.entries())
    }
    .context("failed to compute sync offsets")?;
    let layout = timeline::layout(&report);

    if cli.json {
        let output = serde_json::json!({
            "report": report,
            "timeline": layout,
        });
        if settings.display.json_pretty {
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string(&output)?);
        }
        return Ok(());
    }

    let width = cli
        .timeline_width
        .unwrap_or(settings.display.timeline_width) as usize;

    print!("{}", render::render_report(&report));
    println!();
    print!("{}", render::render_timeline(&layout, width));

    Ok(())
}

/// Load settings from the given path, or fall back to defaults.
///
/// Without an explicit --config, nothing touches the filesystem.
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            let mut manager = ConfigManager::new(path);
            manager
                .load_or_create()
                .with_context(|| format!("failed to load settings from {}", path.display()))?;
            Ok(manager.settings().clone())
        }
        None => Ok(Settings::default()),
    }
}

/// Build the entry list from --video specs, or the demo set when none
/// were given.
fn build_list(specs: &[String]) -> Result<EntryList> {
    if specs.is_empty() {
        return Ok(EntryList::starter());
    }
    let entries = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| parse_video_spec(spec, i as u64 + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(EntryList::from_entries(entries)?)
}

/// Parse a `NAME,DURATION,SYNC_POINT` spec.
///
/// Fields are comma-separated because the timestamps themselves contain
/// colons. The name may contain further commas only if it comes first,
/// since splitting stops after three fields.
fn parse_video_spec(spec: &str, id: u64) -> Result<VideoEntry> {
    let fields: Vec<&str> = spec.splitn(3, ',').collect();
    let (name, duration, sync_point) = match fields[..] {
        [name, duration, sync_point] => (name, duration, sync_point),
        _ => bail!("invalid video spec '{spec}': expected NAME,DURATION,SYNC_POINT"),
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("invalid video spec '{spec}': name is empty");
    }
    Ok(VideoEntry::new(
        id,
        name,
        duration.trim(),
        sync_point.trim(),
    ))
}
