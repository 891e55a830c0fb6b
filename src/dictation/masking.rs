/*!
 * Word masking.
 *
 * Produces length-revealing hints without revealing letters: every word
 * character becomes an underscore, then each underscore run collapses to
 * its length in decimal. `mask("hello")` is `"5"`, `mask("a1 b")` is
 * `"2 1"`.
 */

use crate::dictation::tokenizer::WordChars;

/// Masker over a word-character class.
#[derive(Debug, Clone, Default)]
pub struct WordMasker {
    word_chars: WordChars,
}

impl WordMasker {
    /// Create a masker with the default word-character class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a masker over a custom word-character class.
    pub fn with_word_chars(word_chars: WordChars) -> Self {
        Self { word_chars }
    }

    /// Mask a word: word-class characters become underscore runs, runs
    /// collapse to their decimal length, everything else passes through.
    pub fn mask(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        let mut run = 0usize;

        for c in word.chars() {
            if self.word_chars.contains(c) {
                run += 1;
            } else {
                if run > 0 {
                    out.push_str(&run.to_string());
                    run = 0;
                }
                out.push(c);
            }
        }
        if run > 0 {
            out.push_str(&run.to_string());
        }

        out
    }
}
