/*!
 * # subtrainer
 *
 * The subtitle/cue engine of a language-learning tool: parsing time-coded
 * caption documents, heuristically rejoining fragmented sentences, and
 * comparing learner input against reference text.
 *
 * ## Features
 *
 * - Parse two caption dialects (SRT-style and WebVTT-style), with
 *   optional interleaved translation lines
 * - Rejoin sentences split across timed blocks, to a fixed point
 * - Extended playback windows for replay context
 * - Round-trip serialization of cue documents
 * - Dictation tooling: tokenization, length masks, answer checking,
 *   adaptive hints
 * - LCS-based token alignment for diffing a transcript against
 *   reference text
 *
 * Everything is pure, synchronous computation over caller-owned strings
 * and vectors. There is no I/O here: loading documents, driving media
 * playback, and collecting learner input belong to the surrounding
 * application.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: fixed-width timestamp codec
 * - `subtitle`: cue documents:
 *   - `subtitle::cue`: cue data model and interactive edits
 *   - `subtitle::parser`: two-dialect document parser
 *   - `subtitle::merge`: fixed-point sentence merging
 *   - `subtitle::serializer`: dialect-B emitter
 * - `dictation`: per-keystroke text tooling:
 *   - `dictation::tokenizer`: word/non-word tokenization
 *   - `dictation::masking`: length-revealing word masks
 *   - `dictation::checker`: exact/loose answer equality
 *   - `dictation::hints`: adaptive masking of untyped words
 * - `alignment`: LCS token alignment for visual diffing
 * - `errors`: custom error types for the engine
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod dictation;
pub mod errors;
pub mod subtitle;
pub mod timecode;

// Re-export main types for easier usage
pub use alignment::{AlignedToken, Aligner, AlignmentKind};
pub use dictation::{HintGenerator, SuccessChecker, Token, Tokenizer, WordChars, WordMasker};
pub use errors::{EngineError, MalformedBlock, ParseError, TimecodeError};
pub use subtitle::{Cue, CueCollection, CueMerger, CueParser, MergeConfig, SubtitleFormat};
pub use timecode::{MsSeparator, format_timestamp, parse_timestamp};
