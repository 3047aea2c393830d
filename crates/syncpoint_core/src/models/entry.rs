//! User-editable video entry.

use serde::{Deserialize, Serialize};

/// A single video as entered by the user.
///
/// The time fields stay raw strings here; parsing happens at computation
/// time so half-typed input never corrupts stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Session-stable id, assigned at creation and never reused.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Total length as `M:S` or `H:M:S`.
    pub duration: String,
    /// Timestamp within this video where the shared reference event occurs.
    pub sync_point: String,
}

impl VideoEntry {
    /// Create a new entry.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        duration: impl Into<String>,
        sync_point: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duration: duration.into(),
            sync_point: sync_point.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes() {
        let entry = VideoEntry::new(1, "Video 1", "1:20:48", "11:38");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"duration\":\"1:20:48\""));
        assert!(json.contains("\"sync_point\":\"11:38\""));

        let back: VideoEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
