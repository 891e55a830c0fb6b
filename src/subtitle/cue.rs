/*!
 * Cue data model.
 *
 * A cue is one timed caption unit: a start/end time, one or more content
 * lines, and optional translation lines. Cue identity is positional only —
 * the 1-based index is reassigned after every parse, merge, or edit pass,
 * and there is no persistent identity beyond array position.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::timecode::{MsSeparator, format_timestamp};

/// Fallback duration for an interactively inserted cue at the end of the
/// sheet, when there is no following cue to bound it.
const DEFAULT_INSERT_DURATION_MS: u64 = 2_000;

/// A single timed caption unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    /// 1-based, contiguous position in the collection
    pub index: usize,

    /// Start time in ms
    pub start_ms: u64,

    /// End time in ms
    pub end_ms: u64,

    /// Primary (target-language) text lines
    pub content_lines: Vec<String>,

    /// Translation lines, empty when the document carries none
    pub translation_lines: Vec<String>,

    /// Start of the extended playback window, bounded by the previous cue
    pub extended_start_ms: u64,

    /// End of the extended playback window, bounded by the next cue
    pub extended_end_ms: u64,

    /// Transient UI state, not persisted
    #[serde(skip)]
    pub active: bool,
}

impl Cue {
    /// Create a new cue. The extended window starts out collapsed onto the
    /// cue's own time range until `CueCollection::recompute_extensions`
    /// widens it.
    pub fn new(
        index: usize,
        start_ms: u64,
        end_ms: u64,
        content_lines: Vec<String>,
        translation_lines: Vec<String>,
    ) -> Self {
        Cue {
            index,
            start_ms,
            end_ms,
            content_lines,
            translation_lines,
            extended_start_ms: start_ms,
            extended_end_ms: end_ms,
            active: false,
        }
    }

    /// Primary text flattened to a single line, content lines joined with
    /// a single space. This is the reference text for dictation.
    pub fn content_text(&self) -> String {
        self.content_lines.join(" ")
    }

    /// Translation joined with newlines, for display.
    pub fn translation_text(&self) -> String {
        self.translation_lines.join("\n")
    }

    /// First content line, if any.
    pub fn first_content_line(&self) -> Option<&str> {
        self.content_lines.first().map(String::as_str)
    }

    /// Last content line, if any.
    pub fn last_content_line(&self) -> Option<&str> {
        self.content_lines.last().map(String::as_str)
    }

    /// Whether the cue carries no primary text at all.
    pub fn is_empty(&self) -> bool {
        self.content_lines.iter().all(|line| line.trim().is_empty())
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} --> {}",
            format_timestamp(self.start_ms, MsSeparator::Dot),
            format_timestamp(self.end_ms, MsSeparator::Dot)
        )?;
        writeln!(f, "{}", self.content_text())?;
        for line in &self.translation_lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// Ordered collection of cues with interactive editing operations.
///
/// Every mutating operation re-establishes the two collection invariants:
/// indices are contiguous 1..N, and each cue's extended playback window is
/// bounded by its neighbors (or by the cue itself at the boundaries).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueCollection {
    /// The cues, ordered by index
    pub cues: Vec<Cue>,
}

impl CueCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        CueCollection { cues: Vec::new() }
    }

    /// Create a collection from parsed cues, establishing the invariants.
    pub fn from_cues(cues: Vec<Cue>) -> Self {
        let mut collection = CueCollection { cues };
        collection.renumber();
        collection.recompute_extensions();
        collection
    }

    /// Number of cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the collection holds no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Reassign contiguous 1-based indices.
    pub fn renumber(&mut self) {
        for (i, cue) in self.cues.iter_mut().enumerate() {
            cue.index = i + 1;
        }
    }

    /// Recompute every cue's extended playback window: the window reaches
    /// back to the previous cue's start and forward to the next cue's end,
    /// giving replay margin without overlapping neighboring sentences.
    pub fn recompute_extensions(&mut self) {
        let len = self.cues.len();
        for i in 0..len {
            self.cues[i].extended_start_ms = if i > 0 {
                self.cues[i - 1].start_ms
            } else {
                self.cues[i].start_ms
            };
            self.cues[i].extended_end_ms = if i + 1 < len {
                self.cues[i + 1].end_ms
            } else {
                self.cues[i].end_ms
            };
        }
    }

    /// Insert a new empty cue after position `pos` (0-based), timed into
    /// the gap before the following cue. Returns false when `pos` is out
    /// of range.
    pub fn insert_after(&mut self, pos: usize) -> bool {
        if pos >= self.cues.len() {
            return false;
        }

        let start_ms = self.cues[pos].end_ms;
        let end_ms = match self.cues.get(pos + 1) {
            Some(next) => next.start_ms.max(start_ms),
            None => start_ms + DEFAULT_INSERT_DURATION_MS,
        };

        let cue = Cue::new(0, start_ms, end_ms, Vec::new(), Vec::new());
        self.cues.insert(pos + 1, cue);
        self.renumber();
        self.recompute_extensions();
        true
    }

    /// Remove the cue at position `pos` (0-based), returning it.
    pub fn remove(&mut self, pos: usize) -> Option<Cue> {
        if pos >= self.cues.len() {
            return None;
        }

        let removed = self.cues.remove(pos);
        self.renumber();
        self.recompute_extensions();
        Some(removed)
    }

    /// Unconditionally merge the cue at `pos` with its successor. Unlike
    /// the heuristic merge engine this is a user-driven edit and applies
    /// no candidate test. Returns false when there is no successor.
    pub fn merge_with_next(&mut self, pos: usize) -> bool {
        if pos + 1 >= self.cues.len() {
            return false;
        }

        let next = self.cues.remove(pos + 1);
        let prev = &mut self.cues[pos];
        prev.end_ms = next.end_ms;
        prev.content_lines.extend(next.content_lines);
        prev.translation_lines.extend(next.translation_lines);

        self.renumber();
        self.recompute_extensions();
        true
    }

    /// Adjust the time range of the cue at `pos` (0-based). Returns false
    /// when `pos` is out of range.
    pub fn set_times(&mut self, pos: usize, start_ms: u64, end_ms: u64) -> bool {
        match self.cues.get_mut(pos) {
            Some(cue) => {
                cue.start_ms = start_ms;
                cue.end_ms = end_ms;
                self.recompute_extensions();
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for CueCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cue Collection")?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}
