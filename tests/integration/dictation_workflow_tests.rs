/*!
 * End-to-end dictation exercise flows: load a document, practice a cue
 * with hints and checking, diff a transcript against the reference.
 */

use subtrainer::alignment::{Aligner, AlignmentKind};
use subtrainer::dictation::{HintGenerator, SuccessChecker};
use subtrainer::subtitle::{self, SubtitleFormat};

use crate::common;

#[test]
fn test_dictationFlow_fromFragmentedDocument_shouldPracticeWholeSentence() {
    common::init_logging();

    // The document splits one sentence across three cues; the learner
    // should be asked for the whole sentence.
    let collection =
        subtitle::load(common::sample_fragmented_srt(), SubtitleFormat::Srt, false).unwrap();
    let reference = collection.cues[0].content_text();
    assert_eq!(reference, "Er sagte, dass er morgen kommen wird.");

    let hints = HintGenerator::new();
    let checker = SuccessChecker::new();

    // Nothing typed yet: every word masked, punctuation in place
    assert_eq!(hints.tip("", &reference), "2 5, 4 2 6 6 4.");

    // A few words in, typed out of order
    let partial = "dass Er wird";
    assert_eq!(hints.tip(partial, &reference), "Er 5, dass 2 6 6 wird.");
    assert!(!checker.is_correct(partial, &reference));

    // Full answer without punctuation still counts
    let full = "Er sagte dass er morgen kommen wird";
    assert_eq!(hints.tip(full, &reference), reference);
    assert!(checker.is_correct(full, &reference));
}

#[test]
fn test_dictationFlow_playbackWindow_shouldReachIntoNeighbors() {
    let collection =
        subtitle::load(common::sample_fragmented_srt(), SubtitleFormat::Srt, false).unwrap();

    // Replay of the second sentence may start at the first sentence's
    // start for context, and the first sentence's replay may run into
    // the second
    assert_eq!(
        collection.cues[1].extended_start_ms,
        collection.cues[0].start_ms
    );
    assert_eq!(
        collection.cues[0].extended_end_ms,
        collection.cues[1].end_ms
    );
}

#[test]
fn test_transcriptFlow_withRecognizedSpeech_shouldDiffAgainstReference() {
    let collection =
        subtitle::load(common::sample_srt_translated(), SubtitleFormat::Srt, true).unwrap();
    let reference = collection.cues[1].content_text();
    assert_eq!(reference, "Ich habe dich nicht gehört.");

    // A speech-recognition candidate that dropped one word and added one
    let candidate = "Ich habe dich wohl gehört";
    let result = Aligner::new().align(&reference, candidate);

    let omitted: Vec<&str> = result
        .iter()
        .filter(|t| t.kind == AlignmentKind::Omitted && t.text.trim() != "")
        .map(|t| t.text.as_str())
        .collect();
    let inserted: Vec<&str> = result
        .iter()
        .filter(|t| t.kind == AlignmentKind::Inserted && t.text.trim() != "")
        .map(|t| t.text.as_str())
        .collect();

    // The dropped word and the trailing period the candidate never spoke
    assert_eq!(omitted, vec!["nicht", "."]);
    assert_eq!(inserted, vec!["wohl"]);
}

#[test]
fn test_editFlow_userMergesAndRetimesCues_shouldKeepInvariants() {
    let mut collection = subtitle::load(common::sample_srt(), SubtitleFormat::Srt, false).unwrap();
    let initial = collection.len();

    assert!(collection.merge_with_next(0));
    assert!(collection.insert_after(0));
    assert!(collection.set_times(1, 9_100, 9_800));

    assert_eq!(collection.len(), initial);
    for (i, cue) in collection.cues.iter().enumerate() {
        assert_eq!(cue.index, i + 1);
        assert!(cue.extended_start_ms <= cue.start_ms);
        assert!(cue.extended_end_ms >= cue.end_ms);
    }
}
