//! Entry list lifecycle management.
//!
//! [`EntryList`] owns the session's videos and is the only mutable state
//! in the crate. Front ends mutate it through `add`/`remove`/`update_*`
//! and recompute offsets from `entries()` after every change; the
//! `version` counter tells a caller cheaply whether anything changed
//! since it last computed.
//!
//! Invariants:
//! - the list never drops below one entry (`remove` on a singleton is a
//!   rejected no-op),
//! - ids are handed out by a monotonic counter and never reused within a
//!   session, even after deletions.

use thiserror::Error;

use crate::models::VideoEntry;

/// Error returned when constructing an [`EntryList`] from no entries.
#[derive(Debug, Error)]
#[error("an entry list needs at least one video")]
pub struct EmptyEntryList;

/// Owned, versioned collection of video entries.
#[derive(Debug, Clone)]
pub struct EntryList {
    /// Entries in display order.
    entries: Vec<VideoEntry>,
    /// Next id to hand out; only ever increments.
    next_id: u64,
    /// Bumped on every successful mutation.
    version: u64,
}

impl EntryList {
    /// Create a list seeded with the three demo videos.
    pub fn starter() -> Self {
        Self {
            entries: vec![
                VideoEntry::new(1, "Video 1", "1:20:48", "11:38"),
                VideoEntry::new(2, "Video 2", "45:30", "9:50"),
                VideoEntry::new(3, "Video 3", "52:15", "8:57"),
            ],
            next_id: 4,
            version: 0,
        }
    }

    /// Create a list from existing entries.
    ///
    /// The id counter starts past the largest supplied id.
    pub fn from_entries(entries: Vec<VideoEntry>) -> Result<Self, EmptyEntryList> {
        if entries.is_empty() {
            return Err(EmptyEntryList);
        }
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Ok(Self {
            entries,
            next_id,
            version: 0,
        })
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    /// Get an entry by id.
    pub fn get(&self, id: u64) -> Option<&VideoEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries. Always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; present for completeness of the collection API.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutation counter, bumped on every successful change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Append a new entry named `{name_prefix} {id}` with the given
    /// default timestamps. Returns the new entry's id.
    pub fn add(&mut self, name_prefix: &str, duration: &str, sync_point: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(VideoEntry::new(
            id,
            format!("{} {}", name_prefix, id),
            duration,
            sync_point,
        ));
        self.version += 1;
        tracing::debug!("added entry {} ({} total)", id, self.entries.len());
        id
    }

    /// Remove an entry by id.
    ///
    /// Returns false without changing anything when the id is unknown or
    /// when removal would empty the list.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.entries.len() <= 1 {
            tracing::debug!("refusing to remove last remaining entry");
            return false;
        }
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(pos);
        self.version += 1;
        tracing::debug!("removed entry {} ({} remain)", id, self.entries.len());
        true
    }

    /// Rename an entry. Returns false when the id is unknown.
    pub fn update_name(&mut self, id: u64, name: impl Into<String>) -> bool {
        self.update(id, |entry, value| entry.name = value, name.into())
    }

    /// Replace an entry's duration string. Returns false when the id is
    /// unknown.
    pub fn update_duration(&mut self, id: u64, duration: impl Into<String>) -> bool {
        self.update(id, |entry, value| entry.duration = value, duration.into())
    }

    /// Replace an entry's sync point string. Returns false when the id is
    /// unknown.
    pub fn update_sync_point(&mut self, id: u64, sync_point: impl Into<String>) -> bool {
        self.update(id, |entry, value| entry.sync_point = value, sync_point.into())
    }

    fn update(&mut self, id: u64, apply: fn(&mut VideoEntry, String), value: String) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        apply(entry, value);
        self.version += 1;
        true
    }
}

impl Default for EntryList {
    fn default() -> Self {
        Self::starter()
    }
}
