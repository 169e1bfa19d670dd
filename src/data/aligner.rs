// ============================================================
// Label Aligner
// ============================================================
// Turns a document's sparse span annotations into a dense label
// sequence: one integer code per whitespace-delimited word.
//
// Example:
//   text  = "a b c d"
//   row   = (discourse_type="Claim", predictionstring="1 2")
//   vocab = {"None": 0, "Claim": 1}
//   out   = words ["a","b","c","d"], labels [0, 1, 1, 0]
//
// Overlap policy: rows are overlaid in input order and the last
// write wins at any shared index — no merging, no error. Trained
// models and golden fixtures depend on this exact behaviour.
//
// Bounds policy: a predictionstring index at or past the word
// count fails the whole document. Clamping or dropping the index
// would silently shift labels relative to the reference data.

use crate::domain::annotation::AnnotationRow;
use crate::domain::vocabulary::LabelVocabulary;
use crate::error::AlignError;

/// Compute the label sequence for one document.
///
/// `rows` is the document's annotation subset in table order.
/// Returns the tokenized words together with one label per word;
/// the two are always the same length.
pub fn align(
    text: &str,
    rows: &[&AnnotationRow],
    vocab: &LabelVocabulary,
) -> Result<(Vec<String>, Vec<i64>), AlignError> {
    // Step 1: whitespace tokenization — the only tokenization
    // this system does. N words → N labels.
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    // Step 2: every word starts as background
    let mut labels = vec![vocab.none_code(); words.len()];

    // Step 3: overlay each span in input order (later rows win)
    for row in rows {
        let code = vocab.code_of(&row.discourse_type)?;
        for index in row.word_indices()? {
            // Negative indices fail usize conversion, indices past
            // the end fail get_mut — both are the same bounds error
            let slot = usize::try_from(index)
                .ok()
                .and_then(|i| labels.get_mut(i))
                .ok_or(AlignError::WordIndexOutOfRange {
                    index,
                    word_count: words.len(),
                })?;
            *slot = code;
        }
    }

    Ok((words, labels))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vocab(pairs: &[(&str, i64)]) -> LabelVocabulary {
        let map: HashMap<String, i64> = pairs
            .iter()
            .map(|(name, code)| (name.to_string(), *code))
            .collect();
        LabelVocabulary::new(map).unwrap()
    }

    #[test]
    fn test_no_rows_gives_all_background() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let (words, labels) = align("one two three", &[], &v).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(labels, vec![0, 0, 0]);
    }

    #[test]
    fn test_single_span_scenario() {
        // text = "a b c d", Claim over words 1..=2 → [0,1,1,0]
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let row = AnnotationRow::new("d", "Claim", "1 2");
        let (words, labels) = align("a b c d", &[&row], &v).unwrap();
        assert_eq!(words, vec!["a", "b", "c", "d"]);
        assert_eq!(labels, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_disjoint_spans_leave_gaps_as_background() {
        let v = vocab(&[("None", 0), ("Lead", 1), ("Claim", 2)]);
        let lead  = AnnotationRow::new("d", "Lead", "0");
        let claim = AnnotationRow::new("d", "Claim", "3 4");
        let (_, labels) = align("v w x y z", &[&lead, &claim], &v).unwrap();
        assert_eq!(labels, vec![1, 0, 0, 2, 2]);
    }

    #[test]
    fn test_overlap_is_last_write_wins() {
        // R1 covers [0,1], R2 covers [1,2]; R2 processed second,
        // so index 1 ends up with R2's code: [1,2,2]
        let v  = vocab(&[("None", 0), ("A", 1), ("B", 2)]);
        let r1 = AnnotationRow::new("d", "A", "0 1");
        let r2 = AnnotationRow::new("d", "B", "1 2");
        let (_, labels) = align("x y z", &[&r1, &r2], &v).unwrap();
        assert_eq!(labels, vec![1, 2, 2]);
    }

    #[test]
    fn test_align_is_idempotent() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let row = AnnotationRow::new("d", "Claim", "0 1");
        let first  = align("p q r", &[&row], &v).unwrap();
        let second = align("p q r", &[&row], &v).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_gives_empty_sequences() {
        let v = vocab(&[("None", 0)]);
        let (words, labels) = align("", &[], &v).unwrap();
        assert!(words.is_empty());
        assert!(labels.is_empty());
    }

    #[test]
    fn test_out_of_range_index_fails_the_document() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let row = AnnotationRow::new("d", "Claim", "2 3");
        let err = align("a b c", &[&row], &v).unwrap_err();
        assert_eq!(err, AlignError::WordIndexOutOfRange { index: 3, word_count: 3 });
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let row = AnnotationRow::new("d", "Claim", "-1 0");
        let err = align("a b", &[&row], &v).unwrap_err();
        assert_eq!(err, AlignError::WordIndexOutOfRange { index: -1, word_count: 2 });
    }

    #[test]
    fn test_unknown_discourse_type_fails_the_document() {
        let v = vocab(&[("None", 0)]);
        let row = AnnotationRow::new("d", "Rebuttal", "0");
        assert_eq!(
            align("a b", &[&row], &v).unwrap_err(),
            AlignError::UnknownDiscourseType("Rebuttal".to_string())
        );
    }

    #[test]
    fn test_malformed_predictionstring_fails_the_document() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let row = AnnotationRow::new("d", "Claim", "0 oops");
        assert!(matches!(
            align("a b", &[&row], &v),
            Err(AlignError::MalformedPredictionString { .. })
        ));
    }

    #[test]
    fn test_labels_always_match_word_count() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let row = AnnotationRow::new("d", "Claim", "0");
        let (words, labels) = align("only partial coverage here", &[&row], &v).unwrap();
        assert_eq!(words.len(), labels.len());
        assert_eq!(labels.len(), 4);
    }
}
