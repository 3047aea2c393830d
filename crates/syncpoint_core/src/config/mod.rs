//! Configuration management.
//!
//! TOML-backed settings with logical sections and atomic file writes
//! (write to temp file, then rename). Settings cover presentation
//! defaults only; the entry list itself is never persisted.
//!
//! # Example
//!
//! ```no_run
//! use syncpoint_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("syncpoint.toml");
//! config.load_or_create().unwrap();
//!
//! println!("new entries start at {}", config.settings().defaults.duration);
//!
//! config.settings_mut().display.timeline_width = 80;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{DisplaySettings, LoggingSettings, NewEntrySettings, Settings};
