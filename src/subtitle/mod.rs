/*!
 * Subtitle document handling: the cue data model, the two-dialect parser,
 * the heuristic merge engine, and the dialect-B serializer.
 *
 * # Architecture
 *
 * - `cue`: cue data model and interactive editing operations
 * - `parser`: blank-line block splitting and per-block validation
 * - `merge`: fixed-point rejoining of fragmented sentences
 * - `serializer`: dialect-B emitter for round-trip persistence
 */

pub mod cue;
pub mod merge;
pub mod parser;
pub mod serializer;

// Re-export main types
pub use cue::{Cue, CueCollection};
pub use merge::{CueMerger, MergeConfig};
pub use parser::{CueParser, SubtitleFormat};

use crate::errors::ParseError;

/// Parse a document and merge fragmented cues in one step — the usual
/// load path of the surrounding application.
pub fn load(
    text: &str,
    format: SubtitleFormat,
    contains_translation: bool,
) -> Result<CueCollection, ParseError> {
    let mut collection = CueParser::new(format)
        .with_translation(contains_translation)
        .parse(text)?;
    CueMerger::new().merge(&mut collection);
    Ok(collection)
}
