/*!
 * Error types for the subtrainer engine.
 *
 * This module contains custom error types for different parts of the engine,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Nothing here is process-fatal: every failure is surfaced as text so the
 * caller can show it to the user for correction.
 */

use thiserror::Error;

/// Errors that can occur when parsing a time code.
///
/// Time codes are edited character-by-character in the surrounding
/// application, so an unparsable string is an ordinary recoverable value
/// and must never abort an editing session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    /// The text does not match the HH:MM:SS,mmm / HH:MM:SS.mmm shape
    #[error("Invalid timestamp format: {0}")]
    InvalidFormat(String),

    /// Structurally valid but with out-of-range minute/second fields
    #[error("Invalid time components in timestamp: {0}")]
    InvalidComponents(String),
}

/// Why a single document block failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockErrorReason {
    /// Dialect A requires a bare integer on the first line of each block
    #[error("invalid sequence number '{0}'")]
    InvalidSequenceNumber(String),

    /// The time-range line could not be parsed
    #[error("unparsable time range '{0}'")]
    InvalidTimeRange(String),

    /// The block has fewer lines than the dialect requires
    #[error("too few lines ({0})")]
    TooFewLines(usize),
}

/// A single structurally invalid block, identified by its 1-based position
/// in the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Block {index}: {reason}")]
pub struct MalformedBlock {
    /// 1-based block position in the document
    pub index: usize,
    /// What was wrong with the block
    pub reason: BlockErrorReason,
}

impl MalformedBlock {
    /// Create a malformed-block error for the given block position.
    pub fn new(index: usize, reason: BlockErrorReason) -> Self {
        Self { index, reason }
    }
}

/// Errors that can occur during cue document parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The dialect selector is not supported. Fatal for the engine;
    /// the caller may let the user re-select a format.
    #[error("Unknown subtitle format: {0}")]
    UnknownFormat(String),

    /// One or more blocks were structurally invalid. The parse is
    /// all-or-nothing: no partial cue list is ever returned alongside
    /// errors. Per-block messages are joined with newlines.
    #[error("{}", .0.iter().map(|b| b.to_string()).collect::<Vec<_>>().join("\n"))]
    Malformed(Vec<MalformedBlock>),
}

/// Main engine error type that wraps all other errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Error from the time code codec
    #[error("Timecode error: {0}")]
    Timecode(#[from] TimecodeError),

    /// Error from document parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
