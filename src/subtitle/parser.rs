/*!
 * Cue document parsing.
 *
 * Two document dialects are supported:
 * - Dialect A (SRT): sequence-number line, comma-millisecond time range,
 *   content lines.
 * - Dialect B (WebVTT-style): optional BOM + header, dot-millisecond time
 *   range, no sequence number.
 *
 * The parser fails closed: a structurally invalid block yields one
 * `MalformedBlock`, all block errors are aggregated, and any error aborts
 * the whole parse. A partial cue list is never returned alongside errors.
 */

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{BlockErrorReason, MalformedBlock, ParseError};
use crate::subtitle::cue::{Cue, CueCollection};
use crate::timecode::{self, MsSeparator};

// Dialect-strict time-range regexes
static SRT_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2},\d{3})$")
        .expect("Invalid SRT range regex")
});
static VTT_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2}\.\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2}\.\d{3})$")
        .expect("Invalid VTT range regex")
});

// Inline style markup stripped from content lines: <i>/<b>/<u>, <font ...>,
// and ASS position tags like {\an8}
static STYLE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</?[ibu]>|</?font[^>]*>|\{\\an\d\}").expect("Invalid style tag regex")
});

/// Supported document dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// Dialect A: numbered blocks, comma millisecond separator
    Srt,
    /// Dialect B: optional header, dot millisecond separator
    Vtt,
}

impl SubtitleFormat {
    /// Resolve a dialect from a file extension. Anything unsupported is a
    /// fatal `UnknownFormat` error; the caller may let the user re-select.
    pub fn from_extension(ext: &str) -> Result<Self, ParseError> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "srt" => Ok(SubtitleFormat::Srt),
            "vtt" => Ok(SubtitleFormat::Vtt),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }

    /// The millisecond separator this dialect uses.
    pub fn ms_separator(self) -> MsSeparator {
        match self {
            SubtitleFormat::Srt => MsSeparator::Comma,
            SubtitleFormat::Vtt => MsSeparator::Dot,
        }
    }

    fn range_regex(self) -> &'static Regex {
        match self {
            SubtitleFormat::Srt => &SRT_RANGE_REGEX,
            SubtitleFormat::Vtt => &VTT_RANGE_REGEX,
        }
    }
}

/// Parser for one document dialect.
#[derive(Debug, Clone)]
pub struct CueParser {
    format: SubtitleFormat,
    contains_translation: bool,
}

impl CueParser {
    /// Create a parser for the given dialect, without translation lines.
    pub fn new(format: SubtitleFormat) -> Self {
        CueParser {
            format,
            contains_translation: false,
        }
    }

    /// Whether each block carries translation lines after the first
    /// content line.
    pub fn with_translation(mut self, contains_translation: bool) -> Self {
        self.contains_translation = contains_translation;
        self
    }

    /// Parse a whole document into an ordered cue collection.
    ///
    /// All-or-nothing: on any block error the parse fails with every
    /// per-block message aggregated. Cues that end up with no content
    /// lines are discarded, then the survivors are renumbered 1..N and
    /// their extended playback windows computed.
    pub fn parse(&self, text: &str) -> Result<CueCollection, ParseError> {
        let normalized = normalize_document(text, self.format);
        let blocks = split_blocks(&normalized);

        let mut cues = Vec::with_capacity(blocks.len());
        let mut errors = Vec::new();

        for (i, block) in blocks.iter().enumerate() {
            match self.parse_block(i + 1, block) {
                Ok(cue) => cues.push(cue),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(ParseError::Malformed(errors));
        }

        let before = cues.len();
        cues.retain(|cue| !cue.is_empty());
        if cues.len() < before {
            debug!("Discarded {} empty cue(s) after parse", before - cues.len());
        }

        let overlap_count = cues
            .windows(2)
            .filter(|pair| pair[0].end_ms > pair[1].start_ms)
            .count();
        if overlap_count > 0 {
            warn!("Found {} overlapping cue(s)", overlap_count);
        }

        debug!(
            "Parsed {} cue(s) from {} block(s) ({:?})",
            cues.len(),
            blocks.len(),
            self.format
        );

        Ok(CueCollection::from_cues(cues))
    }

    /// Parse a single blank-line-delimited block into a cue.
    fn parse_block(&self, block_index: usize, lines: &[&str]) -> Result<Cue, MalformedBlock> {
        let min_lines = match self.format {
            SubtitleFormat::Srt => 2,
            SubtitleFormat::Vtt => 1,
        };
        if lines.len() < min_lines {
            return Err(MalformedBlock::new(
                block_index,
                BlockErrorReason::TooFewLines(lines.len()),
            ));
        }

        let mut rest = lines;
        if self.format == SubtitleFormat::Srt {
            let seq_line = rest[0].trim();
            if seq_line.parse::<usize>().is_err() {
                return Err(MalformedBlock::new(
                    block_index,
                    BlockErrorReason::InvalidSequenceNumber(seq_line.to_string()),
                ));
            }
            rest = &rest[1..];
        }

        let range_line = rest[0].trim();
        let (start_ms, end_ms) = self.parse_time_range(range_line).ok_or_else(|| {
            MalformedBlock::new(
                block_index,
                BlockErrorReason::InvalidTimeRange(range_line.to_string()),
            )
        })?;

        let content: Vec<String> = rest[1..]
            .iter()
            .map(|line| strip_style_markup(line))
            .collect();

        let (content_lines, translation_lines) = if self.contains_translation {
            match content.split_first() {
                Some((first, remaining)) => (vec![first.clone()], remaining.to_vec()),
                None => (Vec::new(), Vec::new()),
            }
        } else {
            (content, Vec::new())
        };

        Ok(Cue::new(
            block_index,
            start_ms,
            end_ms,
            content_lines,
            translation_lines,
        ))
    }

    fn parse_time_range(&self, line: &str) -> Option<(u64, u64)> {
        let caps = self.format.range_regex().captures(line)?;
        let start_ms = timecode::parse_timestamp(&caps[1]).ok()?;
        let end_ms = timecode::parse_timestamp(&caps[2]).ok()?;
        Some((start_ms, end_ms))
    }
}

/// Remove inline style markup from a content line.
pub fn strip_style_markup(line: &str) -> String {
    STYLE_TAG_REGEX.replace_all(line.trim(), "").to_string()
}

/// Normalize line endings, strip the BOM, and for dialect B drop the
/// header section (everything up to the first blank line when the
/// document opens with `WEBVTT`).
fn normalize_document(text: &str, format: SubtitleFormat) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    if format == SubtitleFormat::Vtt && normalized.starts_with("WEBVTT") {
        normalized = match normalized.split_once("\n\n") {
            Some((_, body)) => body.to_string(),
            None => String::new(),
        };
    }

    normalized
}

/// Split a normalized document into blank-line-delimited blocks.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
