/*!
 * Token alignment for transcript diffing.
 *
 * Aligns a candidate transcript (typically speech-recognition output)
 * against reference text via a longest-common-subsequence over tokens,
 * then renders a classified sequence for visual diffing: candidate tokens
 * in the LCS are matched, candidate tokens outside it are inserted, and
 * reference tokens the candidate skipped are omitted at their relative
 * positions.
 *
 * Omitted covers both the gap between two matches and the reference tail
 * after the last match; the two cases carry one unified semantic.
 */

use serde::{Deserialize, Serialize};

use crate::dictation::tokenizer::{Token, Tokenizer, WordChars};

/// Classification of one aligned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentKind {
    /// Present in both sequences
    Matched,
    /// Present only in the candidate
    Inserted,
    /// Present only in the reference
    Omitted,
}

/// One classified token of an alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedToken {
    /// How the token aligned
    pub kind: AlignmentKind,
    /// The token text
    pub text: String,
}

impl AlignedToken {
    fn new(kind: AlignmentKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// LCS-based aligner between reference text and a candidate transcript.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    tokenizer: Tokenizer,
}

impl Aligner {
    /// Create an aligner with the default word-character class.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an aligner over a custom word-character class.
    pub fn with_word_chars(word_chars: WordChars) -> Self {
        Self {
            tokenizer: Tokenizer::with_word_chars(word_chars),
        }
    }

    /// Align `candidate` against `reference`.
    ///
    /// The output covers every candidate token exactly once, plus every
    /// unmatched reference token at its relative position.
    pub fn align(&self, reference: &str, candidate: &str) -> Vec<AlignedToken> {
        let ref_tokens = self.tokenizer.tokenize(reference, false);
        let cand_tokens = self.tokenizer.tokenize(candidate, false);

        let pairs = lcs_pairs(&ref_tokens, &cand_tokens);
        render(ref_tokens, cand_tokens, &pairs)
    }
}

/// Matched index pairs `(reference, candidate)`, strictly increasing in
/// both components, reconstructed from a bottom-up LCS table.
///
/// Tie-break: when the two DP branches score equally, the reference
/// pointer advances — a reference token is preferably treated as skipped
/// rather than a candidate token as inserted.
fn lcs_pairs(reference: &[Token], candidate: &[Token]) -> Vec<(usize, usize)> {
    let n = reference.len();
    let m = candidate.len();

    // dp[i][j] = LCS length of reference[i..] and candidate[j..]
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if reference[i].text == candidate[j].text {
                1 + dp[i + 1][j + 1]
            } else {
                dp[i + 1][j].max(dp[i][j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if reference[i].text == candidate[j].text && dp[i][j] == 1 + dp[i + 1][j + 1] {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if dp[i + 1][j] >= dp[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }

    pairs
}

/// Render the classified sequence left-to-right over the candidate,
/// weaving omitted reference tokens in at their relative positions.
fn render(
    reference: Vec<Token>,
    candidate: Vec<Token>,
    pairs: &[(usize, usize)],
) -> Vec<AlignedToken> {
    let mut out = Vec::with_capacity(reference.len().max(candidate.len()));
    let mut ref_tokens = reference.into_iter().enumerate();
    let mut cand_tokens = candidate.into_iter().enumerate();

    for &(ref_i, cand_j) in pairs {
        for (j, token) in cand_tokens.by_ref() {
            if j == cand_j {
                // The matched token itself; its reference twin is consumed
                // together with the preceding omissions below
                for (i, ref_token) in ref_tokens.by_ref() {
                    if i == ref_i {
                        break;
                    }
                    out.push(AlignedToken::new(AlignmentKind::Omitted, ref_token.text));
                }
                out.push(AlignedToken::new(AlignmentKind::Matched, token.text));
                break;
            }
            out.push(AlignedToken::new(AlignmentKind::Inserted, token.text));
        }
    }

    for (_, token) in cand_tokens {
        out.push(AlignedToken::new(AlignmentKind::Inserted, token.text));
    }
    for (_, token) in ref_tokens {
        out.push(AlignedToken::new(AlignmentKind::Omitted, token.text));
    }

    out
}
