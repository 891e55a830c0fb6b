/*!
 * Tests for tokenization and normalization
 */

use subtrainer::dictation::{Token, Tokenizer, WordChars};

/// Concatenating all tokens reconstructs the input exactly
#[test]
fn test_tokenize_allTokens_shouldCoverInput() {
    let tokenizer = Tokenizer::new();
    let samples = [
        "Wie bitte?",
        "Er sagte, dass es regnet.",
        "  führende und 2  Leerzeichen ",
        "你说什么？",
        "",
        "a1 b",
    ];

    for text in samples {
        let tokens = tokenizer.tokenize(text, false);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, text, "coverage broken for {text:?}");
    }
}

#[test]
fn test_tokenize_shouldClassifyWordAndNonWordRuns() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("Wie bitte?", false);

    assert_eq!(
        tokens,
        vec![
            Token::word("Wie"),
            Token::non_word(" "),
            Token::word("bitte"),
            Token::non_word("?"),
        ]
    );
}

#[test]
fn test_tokenize_shouldEmitEachNonWordCharSeparately() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("a, b", false);

    assert_eq!(
        tokens,
        vec![
            Token::word("a"),
            Token::non_word(","),
            Token::non_word(" "),
            Token::word("b"),
        ]
    );
}

#[test]
fn test_tokenize_wordsOnly_shouldKeepOnlyWordRuns() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("Er sagte: «nein»!", true);

    let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, vec!["Er", "sagte", "nein"]);
    assert!(tokens.iter().all(|t| t.is_word));
}

#[test]
fn test_tokenize_withDigits_shouldTreatThemAsWordChars() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("um 19 Uhr", true);

    let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, vec!["um", "19", "Uhr"]);
}

#[test]
fn test_normalize_shouldStripEverythingOutsideWordClass() {
    let tokenizer = Tokenizer::new();

    assert_eq!(tokenizer.normalize("Wie bitte?"), "Wiebitte");
    assert_eq!(tokenizer.normalize("Straße — 7!"), "Straße7");
    assert_eq!(tokenizer.normalize(""), "");
}

#[test]
fn test_normalize_shouldPreserveCase() {
    let tokenizer = Tokenizer::new();
    assert_eq!(tokenizer.normalize("GROSS klein"), "GROSSklein");
}

#[test]
fn test_wordChars_withCustomClass_shouldBeInjectable() {
    let tokenizer = Tokenizer::with_word_chars(WordChars::with_extra("éèàç"));

    let tokens = tokenizer.tokenize("garçon café", true);

    let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(words, vec!["garçon", "café"]);
}

#[test]
fn test_wordChars_defaultClass_shouldTreatCjkAsNonWord() {
    // The word-character class is a deliberate target-language assumption
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("你好", true);
    assert!(tokens.is_empty());
}
