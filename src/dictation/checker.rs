/*!
 * Dictation answer checking.
 *
 * An answer is correct when it equals the reference exactly, or when the
 * two are equal after normalization. Punctuation and whitespace
 * differences are forgiven; case differences are not.
 */

use crate::dictation::tokenizer::{Tokenizer, WordChars};

/// Exact/loose equality checker between learner input and reference text.
#[derive(Debug, Clone, Default)]
pub struct SuccessChecker {
    tokenizer: Tokenizer,
}

impl SuccessChecker {
    /// Create a checker with the default word-character class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checker over a custom word-character class.
    pub fn with_word_chars(word_chars: WordChars) -> Self {
        Self {
            tokenizer: Tokenizer::with_word_chars(word_chars),
        }
    }

    /// Whether `input` matches `reference`, exactly or loosely.
    pub fn is_correct(&self, input: &str, reference: &str) -> bool {
        input == reference
            || self.tokenizer.normalize(input) == self.tokenizer.normalize(reference)
    }
}
