// ============================================================
// Core Traits (Abstractions)
// ============================================================
// The two seams where the core is pluggable:
//
//   CorpusSource  — where the annotation table and the document
//                   references come from. FeedbackCorpus reads
//                   them from a Kaggle-style directory; a test
//                   double can serve them from memory.
//
//   WordTransform — optional post-processing of the tokenized
//                   word sequence, applied AFTER labels are
//                   computed so it can never change alignment.
//                   Absence means identity.
//
// Programming against these traits keeps the dataset wrapper
// free of any knowledge of file formats or transform internals.

use anyhow::Result;

use crate::data::dataset::DocumentRef;
use crate::domain::annotation::AnnotationRow;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the annotation table and the
/// set of documents to label.
///
/// Implementations:
///   - FeedbackCorpus → reads train.csv and a directory of .txt files
pub trait CorpusSource {
    /// The full flat annotation table, in file order.
    fn annotation_table(&self) -> Result<Vec<AnnotationRow>>;

    /// One reference per document to prepare, in a stable order.
    fn document_refs(&self) -> Result<Vec<DocumentRef>>;
}

// ─── WordTransform ────────────────────────────────────────────────────────────
/// An opaque word-sequence → word-sequence transform.
///
/// The core never looks inside: it tokenizes, aligns labels, and
/// only then hands the words to the transform. The returned
/// sequence is what consumers see; the label sequence is already
/// fixed against the original tokenization.
pub trait WordTransform {
    fn apply(&self, words: Vec<String>) -> Vec<String>;
}

/// Any plain function with the right shape is a WordTransform,
/// so tests can pass closures as deterministic stand-ins.
impl<F> WordTransform for F
where
    F: Fn(Vec<String>) -> Vec<String>,
{
    fn apply(&self, words: Vec<String>) -> Vec<String> {
        self(words)
    }
}

/// Lowercase every word. The one built-in transform, exposed on
/// the CLI as --lowercase.
pub struct Lowercase;

impl WordTransform for Lowercase {
    fn apply(&self, words: Vec<String>) -> Vec<String> {
        words.into_iter().map(|w| w.to_lowercase()).collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_word_transform() {
        let reverse = |mut words: Vec<String>| {
            words.reverse();
            words
        };
        let out = reverse.apply(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(out, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_lowercase_transform() {
        let out = Lowercase.apply(vec!["Hiking".to_string(), "IS".to_string()]);
        assert_eq!(out, vec!["hiking".to_string(), "is".to_string()]);
    }
}
