/*!
 * Adaptive hint generation.
 *
 * Builds a per-attempt tip string for the learner: every reference word
 * they have already typed anywhere in their input stays revealed, every
 * other word is replaced by its length mask. Punctuation and whitespace
 * stay in place.
 */

use std::collections::HashSet;

use crate::dictation::masking::WordMasker;
use crate::dictation::tokenizer::{Tokenizer, WordChars};

/// Generator of adaptive dictation hints.
#[derive(Debug, Clone, Default)]
pub struct HintGenerator {
    tokenizer: Tokenizer,
    masker: WordMasker,
}

impl HintGenerator {
    /// Create a generator with the default word-character class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator over a custom word-character class.
    pub fn with_word_chars(word_chars: WordChars) -> Self {
        Self {
            tokenizer: Tokenizer::with_word_chars(word_chars.clone()),
            masker: WordMasker::with_word_chars(word_chars),
        }
    }

    /// Build the tip string for the learner's current input.
    ///
    /// Membership is checked against the set of typed words, not their
    /// positions: a word typed anywhere in the input reveals every
    /// occurrence of it in the reference.
    pub fn tip(&self, input: &str, reference: &str) -> String {
        let typed: HashSet<String> = self
            .tokenizer
            .tokenize(input, true)
            .into_iter()
            .map(|token| token.text)
            .collect();

        self.tokenizer
            .tokenize(reference, false)
            .into_iter()
            .map(|token| {
                if token.is_word && !typed.contains(&token.text) {
                    self.masker.mask(&token.text)
                } else {
                    token.text
                }
            })
            .collect()
    }
}
