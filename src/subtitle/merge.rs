/*!
 * Heuristic cue merging.
 *
 * Source subtitles split one spoken sentence across multiple timed blocks;
 * dictation needs whole sentences. Two adjacent cues are merge candidates
 * when the first one's text is visibly unfinished (ends in a letter, digit,
 * or a joining punctuation mark) and the second one's text continues in
 * lowercase or with a digit.
 *
 * Merge passes repeat until a pass performs zero merges. The loop
 * terminates because each merging pass strictly reduces cue count.
 */

use log::debug;

use crate::subtitle::cue::{Cue, CueCollection};

/// Configuration for the merge heuristic.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Trailing punctuation that marks a cue as unfinished, in addition
    /// to letters and digits
    pub joining_suffixes: Vec<char>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            joining_suffixes: vec![',', ':', '-'],
        }
    }
}

/// Merge engine for fragmented cue collections.
#[derive(Debug, Clone, Default)]
pub struct CueMerger {
    config: MergeConfig,
}

impl CueMerger {
    /// Create a merger with the default joining punctuation.
    pub fn new() -> Self {
        Self {
            config: MergeConfig::default(),
        }
    }

    /// Create a merger with custom configuration.
    pub fn with_config(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Merge fragmented cues to a fixed point, then renumber and recompute
    /// extended playback windows. Returns the total number of merges
    /// performed.
    pub fn merge(&self, collection: &mut CueCollection) -> usize {
        let mut total = 0;
        let mut pass = 0;

        loop {
            pass += 1;
            let merged = self.merge_pass(&mut collection.cues);
            debug!("Merge pass {}: {} merge(s)", pass, merged);
            if merged == 0 {
                break;
            }
            total += merged;
        }

        collection.renumber();
        collection.recompute_extensions();

        debug!(
            "Merge stabilized after {} pass(es), {} merge(s), {} cue(s) remain",
            pass,
            total,
            collection.len()
        );
        total
    }

    /// One left-to-right pass over the cue list. Each merge folds the
    /// successor into the current cue, so chains collapse greedily within
    /// a single pass as far as the candidate test keeps holding.
    fn merge_pass(&self, cues: &mut Vec<Cue>) -> usize {
        let mut merged = 0;
        let mut i = 0;

        while i + 1 < cues.len() {
            if self.is_merge_candidate(&cues[i], &cues[i + 1]) {
                let next = cues.remove(i + 1);
                let prev = &mut cues[i];
                prev.end_ms = next.end_ms;
                prev.content_lines.extend(next.content_lines);
                prev.translation_lines.extend(next.translation_lines);
                merged += 1;
            } else {
                i += 1;
            }
        }

        merged
    }

    /// Whether `prev` and `next` belong to the same sentence: prev's last
    /// content line ends in a letter, digit, or joining punctuation, and
    /// next's first content line starts with a lowercase letter or digit.
    pub fn is_merge_candidate(&self, prev: &Cue, next: &Cue) -> bool {
        let Some(last_char) = prev
            .last_content_line()
            .and_then(|line| line.trim_end().chars().last())
        else {
            return false;
        };
        let Some(first_char) = next
            .first_content_line()
            .and_then(|line| line.trim_start().chars().next())
        else {
            return false;
        };

        let unfinished = last_char.is_alphanumeric()
            || self.config.joining_suffixes.contains(&last_char);
        let continuing = first_char.is_lowercase() || first_char.is_numeric();

        unfinished && continuing
    }
}
