//! Sync offset calculation.

mod calculator;

pub use calculator::{compute, compute_strict, SyncError, TimestampField};
