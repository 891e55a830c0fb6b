/*!
 * Tokenization and normalization.
 *
 * A word run is one or more characters from a configurable word-character
 * class: ASCII letters and digits plus a fixed diacritic set. The class is
 * injectable so the engine generalizes beyond its original target
 * languages; `WordChars::german()` is the default profile.
 *
 * One tokenizer serves both the hinting and the diffing side, so the two
 * cannot silently diverge.
 */

use serde::{Deserialize, Serialize};

/// German diacritics accepted as word characters by the default profile.
const GERMAN_EXTRA_CHARS: &str = "äöüßÄÖÜ";

/// A single token: either a maximal word run or one non-word character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Whether the token is a word run
    pub is_word: bool,
    /// The token text
    pub text: String,
}

impl Token {
    /// Create a word token.
    pub fn word(text: impl Into<String>) -> Self {
        Token {
            is_word: true,
            text: text.into(),
        }
    }

    /// Create a non-word token.
    pub fn non_word(text: impl Into<String>) -> Self {
        Token {
            is_word: false,
            text: text.into(),
        }
    }
}

/// Injectable word-character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordChars {
    /// Non-ASCII characters counted as word characters, in addition to
    /// ASCII letters and digits
    extra: Vec<char>,
}

impl WordChars {
    /// ASCII letters and digits plus German diacritics. The default.
    pub fn german() -> Self {
        Self {
            extra: GERMAN_EXTRA_CHARS.chars().collect(),
        }
    }

    /// ASCII letters and digits only.
    pub fn ascii() -> Self {
        Self { extra: Vec::new() }
    }

    /// ASCII letters and digits plus the given extra characters.
    pub fn with_extra(extra: &str) -> Self {
        Self {
            extra: extra.chars().collect(),
        }
    }

    /// Whether `c` belongs to the word-character class.
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.extra.contains(&c)
    }
}

impl Default for WordChars {
    fn default() -> Self {
        Self::german()
    }
}

/// Tokenizer over a word-character class.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    word_chars: WordChars,
}

impl Tokenizer {
    /// Create a tokenizer with the default word-character class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer over a custom word-character class.
    pub fn with_word_chars(word_chars: WordChars) -> Self {
        Self { word_chars }
    }

    /// The word-character class in use.
    pub fn word_chars(&self) -> &WordChars {
        &self.word_chars
    }

    /// Split text into tokens, in original order.
    ///
    /// Every maximal word run becomes one token. With `words_only` unset,
    /// every individual non-word character additionally becomes a
    /// one-character token, so concatenating all tokens reconstructs the
    /// input exactly.
    pub fn tokenize(&self, text: &str, words_only: bool) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        for c in text.chars() {
            if self.word_chars.contains(c) {
                word.push(c);
            } else {
                if !word.is_empty() {
                    tokens.push(Token::word(std::mem::take(&mut word)));
                }
                if !words_only {
                    tokens.push(Token::non_word(c.to_string()));
                }
            }
        }
        if !word.is_empty() {
            tokens.push(Token::word(word));
        }

        tokens
    }

    /// Remove every character outside the word-character class. Case is
    /// preserved; only punctuation and whitespace disappear.
    pub fn normalize(&self, text: &str) -> String {
        text.chars().filter(|c| self.word_chars.contains(*c)).collect()
    }
}
