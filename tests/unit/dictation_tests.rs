/*!
 * Tests for masking, answer checking and hint generation
 */

use subtrainer::dictation::{HintGenerator, SuccessChecker, WordChars, WordMasker};

#[test]
fn test_mask_withPlainWord_shouldRevealOnlyLength() {
    let masker = WordMasker::new();
    assert_eq!(masker.mask("hello"), "5");
}

#[test]
fn test_mask_withInnerNonWordChar_shouldSplitRuns() {
    let masker = WordMasker::new();
    assert_eq!(masker.mask("a1 b"), "2 1");
    assert_eq!(masker.mask("geht's"), "4'1");
}

#[test]
fn test_mask_withLongWord_shouldUseMultiDigitCount() {
    let masker = WordMasker::new();
    assert_eq!(masker.mask("Donaudampfschiff"), "16");
}

#[test]
fn test_isCorrect_shouldForgivePunctuationButNotCase() {
    let checker = SuccessChecker::new();

    assert!(checker.is_correct("Wie bitte", "Wie bitte?"));
    assert!(!checker.is_correct("wie bitte", "Wie bitte"));
}

#[test]
fn test_isCorrect_shouldForgiveWhitespaceDifferences() {
    let checker = SuccessChecker::new();
    assert!(checker.is_correct("Wie  bitte ?", "Wie bitte?"));
}

#[test]
fn test_isCorrect_withUmlauts_shouldCompareExactly() {
    let checker = SuccessChecker::new();
    assert!(checker.is_correct("Schön!", "Schön"));
    assert!(!checker.is_correct("Schon", "Schön"));
}

#[test]
fn test_tip_shouldMaskUntypedWordsInPlace() {
    let hints = HintGenerator::new();

    let tip = hints.tip("", "Er sagte, dass es regnet.");

    assert_eq!(tip, "2 5, 4 2 6.");
}

#[test]
fn test_tip_shouldRevealTypedWordsAnywhereInInput() {
    let hints = HintGenerator::new();

    // Order-independent membership, not positional matching
    let tip = hints.tip("regnet dass", "Er sagte, dass es regnet.");

    assert_eq!(tip, "2 5, dass 2 regnet.");
}

#[test]
fn test_tip_withEverythingTyped_shouldEqualReference() {
    let hints = HintGenerator::new();

    let reference = "Wie geht es dir?";
    let tip = hints.tip("dir es geht Wie", reference);

    assert_eq!(tip, reference);
}

#[test]
fn test_tip_withProgressiveTyping_shouldRevealIncrementally() {
    let hints = HintGenerator::new();
    let reference = "Wie bitte?";

    assert_eq!(hints.tip("", reference), "3 5?");
    assert_eq!(hints.tip("Wie", reference), "Wie 5?");
    assert_eq!(hints.tip("Wie bitte", reference), "Wie bitte?");
}

#[test]
fn test_dictationTools_withSharedWordClass_shouldAgree() {
    // One injectable class drives masker, checker and hints alike
    let class = WordChars::with_extra("éè");
    let masker = WordMasker::with_word_chars(class.clone());
    let hints = HintGenerator::with_word_chars(class);

    assert_eq!(masker.mask("café"), "4");
    assert_eq!(hints.tip("", "café au lait"), "4 2 4");
}
