//! Settings struct with TOML-based sections.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Defaults applied to newly added entries.
    #[serde(default)]
    pub defaults: NewEntrySettings,

    /// Presentation settings.
    #[serde(default)]
    pub display: DisplaySettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Defaults for entries created through `EntryList::add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntrySettings {
    /// Name prefix; entries are named `{prefix} {id}`.
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,

    /// Default duration string.
    #[serde(default = "default_duration")]
    pub duration: String,

    /// Default sync point string.
    #[serde(default = "default_sync_point")]
    pub sync_point: String,
}

fn default_name_prefix() -> String {
    "Video".to_string()
}

fn default_duration() -> String {
    "30:00".to_string()
}

fn default_sync_point() -> String {
    "5:00".to_string()
}

impl Default for NewEntrySettings {
    fn default() -> Self {
        Self {
            name_prefix: default_name_prefix(),
            duration: default_duration(),
            sync_point: default_sync_point(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Width of the rendered text timeline, in columns.
    #[serde(default = "default_timeline_width")]
    pub timeline_width: u32,

    /// Reject malformed timestamps instead of treating them as 0:00.
    #[serde(default)]
    pub strict_timestamps: bool,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub json_pretty: bool,
}

fn default_timeline_width() -> u32 {
    60
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timeline_width: default_timeline_width(),
            strict_timestamps: false,
            json_pretty: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,
}
