//! Timestamp parsing and formatting.
//!
//! Timestamps are entered as `:`-separated numeric fields in one of two
//! shapes:
//!
//! ```text
//! 45:30     M:S    -> 45 * 60 + 30   = 2730 seconds
//! 1:20:48   H:M:S  -> 1 * 3600 + 20 * 60 + 48 = 4848 seconds
//! ```
//!
//! Two parsing entry points are provided:
//!
//! - [`parse`] rejects malformed input with a [`TimecodeError`].
//! - [`parse_lenient`] maps anything malformed to `0`, for callers that
//!   prefer a degraded result over a failed computation (partially typed
//!   input, for example).
//!
//! Fields are plain signed numbers and are not range-checked: `90:90`
//! parses to `5490`. Formatting uses the shortest shape that fits, so
//! values under an hour come back as `M:SS` and everything else as
//! `H:MM:SS`.

use thiserror::Error;

/// Errors that can occur when parsing a timestamp.
#[derive(Debug, Error)]
pub enum TimecodeError {
    /// Input was empty or whitespace only.
    #[error("empty timestamp")]
    Empty,

    /// Wrong number of `:`-separated fields.
    #[error("expected M:S or H:M:S, got {found} field(s)")]
    FieldCount { found: usize },

    /// A field did not parse as a number.
    #[error("timestamp field {position} is not a number: '{value}'")]
    InvalidField { position: usize, value: String },
}

/// Parse a timestamp into whole seconds.
///
/// Accepts exactly two shapes: `M:S` and `H:M:S`. Anything else is an
/// error naming what went wrong.
pub fn parse(text: &str) -> Result<i64, TimecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimecodeError::Empty);
    }

    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(TimecodeError::FieldCount {
            found: fields.len(),
        });
    }

    let mut values = [0i64; 3];
    for (i, field) in fields.iter().enumerate() {
        let field = field.trim();
        values[i] = field.parse().map_err(|_| TimecodeError::InvalidField {
            position: i + 1,
            value: field.to_string(),
        })?;
    }

    if fields.len() == 3 {
        Ok(values[0] * 3600 + values[1] * 60 + values[2])
    } else {
        Ok(values[0] * 60 + values[1])
    }
}

/// Parse a timestamp, treating malformed input as zero seconds.
pub fn parse_lenient(text: &str) -> i64 {
    parse(text).unwrap_or(0)
}

/// Format whole seconds as a timestamp string.
///
/// Negative values keep their sign in front of the usual digits:
/// `format(-65)` is `"-1:05"`.
pub fn format(total_secs: i64) -> String {
    let abs = total_secs.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    let secs = abs % 60;
    let sign = if total_secs < 0 { "-" } else { "" };

    if hours > 0 {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, secs)
    } else {
        format!("{}{}:{:02}", sign, minutes, secs)
    }
}

/// Format a signed offset in seconds for display.
///
/// Positive offsets get an explicit `+` so direction is visible at a
/// glance: `"+108s"`, `"-65s"`, `"0s"`.
pub fn format_offset(offset_secs: i64) -> String {
    if offset_secs == 0 {
        "0s".to_string()
    } else if offset_secs > 0 {
        format!("+{}s", offset_secs)
    } else {
        format!("{}s", offset_secs)
    }
}
