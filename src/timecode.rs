/*!
 * Time code parsing and formatting.
 *
 * Time codes are fixed-width `HH:MM:SS,mmm` (dialect A) or `HH:MM:SS.mmm`
 * (dialect B) strings; the two dialects differ only in the millisecond
 * separator. Internally a time code is a non-negative number of
 * milliseconds.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::TimecodeError;

// Accepts either millisecond separator; dialect strictness is enforced by
// the cue parser's time-range regexes.
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2}):(\d{2})[,.](\d{3})$").expect("Invalid timecode regex")
});

/// Millisecond separator used when formatting a time code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MsSeparator {
    /// `HH:MM:SS,mmm` — dialect A (SRT)
    Comma,
    /// `HH:MM:SS.mmm` — dialect B (WebVTT-style)
    Dot,
}

impl MsSeparator {
    /// The separator character itself.
    pub fn as_char(self) -> char {
        match self {
            MsSeparator::Comma => ',',
            MsSeparator::Dot => '.',
        }
    }
}

/// Parse a fixed-width time code into milliseconds.
///
/// Both separator dialects are accepted; a string that does not match the
/// shape yields `TimecodeError::InvalidFormat`, out-of-range minute or
/// second fields yield `TimecodeError::InvalidComponents`. Both are
/// ordinary recoverable values, never a panic.
pub fn parse_timestamp(text: &str) -> Result<u64, TimecodeError> {
    let caps = TIMECODE_REGEX
        .captures(text.trim())
        .ok_or_else(|| TimecodeError::InvalidFormat(text.to_string()))?;

    // The regex guarantees each capture is present and numeric
    let field = |i: usize| -> u64 { caps[i].parse().unwrap_or(0) };
    let (hours, minutes, seconds, millis) = (field(1), field(2), field(3), field(4));

    if minutes >= 60 || seconds >= 60 {
        return Err(TimecodeError::InvalidComponents(text.to_string()));
    }

    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}

/// Format milliseconds as a fixed-width time code.
///
/// Hours, minutes and seconds are zero-padded to 2 digits, milliseconds
/// to 3.
pub fn format_timestamp(ms: u64, separator: MsSeparator) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours,
        minutes,
        seconds,
        separator.as_char(),
        millis
    )
}
