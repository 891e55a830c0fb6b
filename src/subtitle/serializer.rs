/*!
 * Cue serialization.
 *
 * Emits dialect-B output: a `WEBVTT` header, then per cue the dot-ms time
 * range, the primary text flattened to one line, and the translation lines
 * verbatim. Time codes round-trip exactly through the codec; primary-text
 * line-wrapping is already flattened by merging and is not reproduced.
 */

use std::fmt::Write;

use crate::subtitle::cue::CueCollection;
use crate::timecode::{MsSeparator, format_timestamp};

/// Document header emitted before the first cue.
const HEADER: &str = "WEBVTT";

/// Serialize a cue collection to dialect-B document text.
pub fn serialize(collection: &CueCollection) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push_str("\n\n");

    for cue in &collection.cues {
        // Infallible: fmt::Write on String never errors
        let _ = writeln!(
            out,
            "{} --> {}",
            format_timestamp(cue.start_ms, MsSeparator::Dot),
            format_timestamp(cue.end_ms, MsSeparator::Dot)
        );
        let _ = writeln!(out, "{}", cue.content_text());
        for line in &cue.translation_lines {
            let _ = writeln!(out, "{}", line);
        }
        out.push('\n');
    }

    out
}
