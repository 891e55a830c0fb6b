/*!
 * Dictation-exercise text tooling: tokenization, masking, answer checking,
 * and adaptive hints. All of it is keyed to one injectable word-character
 * class so the language assumption lives in a single place.
 *
 * # Architecture
 *
 * - `tokenizer`: word/non-word tokenization and normalization
 * - `masking`: length-revealing word masks
 * - `checker`: exact/loose answer equality
 * - `hints`: per-attempt masking of not-yet-typed words
 */

pub mod checker;
pub mod hints;
pub mod masking;
pub mod tokenizer;

// Re-export main types
pub use checker::SuccessChecker;
pub use hints::HintGenerator;
pub use masking::WordMasker;
pub use tokenizer::{Token, Tokenizer, WordChars};
