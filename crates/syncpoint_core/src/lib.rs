//! Syncpoint core - offset calculation for multi-camera recordings.
//!
//! Given several videos that captured the same event, each with a known
//! duration and a "sync point" (the timestamp within that video where a
//! shared real-world moment occurs), this crate computes how far each
//! video's start must be shifted so all sync points coincide on one
//! timeline. The longest video is the reference; everything else is
//! expressed relative to its sync point.
//!
//! This crate contains all business logic with zero UI dependencies.
//! It can be used by a GUI application or a CLI tool.

pub mod config;
pub mod entries;
pub mod logging;
pub mod models;
pub mod sync;
pub mod timecode;
pub mod timeline;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
