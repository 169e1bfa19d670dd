// ============================================================
// Discourse Dataset
// ============================================================
// Presents the whole corpus as a fixed-size, randomly-indexable
// sequence of (words, labels) samples — one per document
// reference — by implementing Burn's Dataset trait so a
// DataLoader can call .get(index) and .len() on it.
//
// Each access is independent and side-effect-free apart from the
// one file read needed in file mode:
//
//   resolve ref → (id, text)
//   index lookup → this document's annotation rows
//   align       → (words, labels)
//   transform   → optional word post-processing
//
// The table, index, and vocabulary are built once at
// construction and never mutated afterwards, so the dataset can
// be shared read-only across data-loading workers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::aligner::align;
use crate::data::index::AnnotationIndex;
use crate::domain::annotation::AnnotationRow;
use crate::domain::document::Document;
use crate::domain::traits::WordTransform;
use crate::domain::vocabulary::LabelVocabulary;

/// One fully prepared training sample: the document's words and
/// one label code per word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledDocument {
    pub id:     String,
    pub words:  Vec<String>,
    pub labels: Vec<i64>,
}

/// How to reach one document's text.
///
/// File mode defers the read to access time and derives the id
/// from the filename stem; inline mode carries the text directly
/// (useful for tests and in-memory corpora).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentRef {
    File(PathBuf),
    Inline { id: String, text: String },
}

impl DocumentRef {
    /// Materialize the referenced document. The only I/O in the
    /// whole access path lives here.
    pub fn resolve(&self) -> Result<Document> {
        match self {
            DocumentRef::File(path) => {
                let id = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .with_context(|| {
                        format!("cannot derive document id from '{}'", path.display())
                    })?
                    .to_string();
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read '{}'", path.display()))?;
                Ok(Document::new(id, text))
            }
            DocumentRef::Inline { id, text } => Ok(Document::new(id.clone(), text.clone())),
        }
    }

    /// The document id without materializing the text. File mode
    /// falls back to the full path display if the stem is not
    /// valid UTF-8.
    pub fn id(&self) -> String {
        match self {
            DocumentRef::File(path) => path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| path.display().to_string()),
            DocumentRef::Inline { id, .. } => id.clone(),
        }
    }
}

/// The corpus as an indexable sequence of labeled documents.
pub struct DiscourseDataset {
    table:   Vec<AnnotationRow>,
    index:   AnnotationIndex,
    refs:    Vec<DocumentRef>,
    vocab:   LabelVocabulary,
    word_pp: Option<Box<dyn WordTransform + Send + Sync>>,
}

impl DiscourseDataset {
    /// Build the dataset. The annotation index is constructed
    /// eagerly here — grouping happens once, not per access.
    pub fn new(
        table: Vec<AnnotationRow>,
        refs: Vec<DocumentRef>,
        vocab: LabelVocabulary,
    ) -> Self {
        let index = AnnotationIndex::build(&table);
        Self { table, index, refs, vocab, word_pp: None }
    }

    /// Attach a word post-processing transform. Applied after
    /// alignment, so it never affects label computation.
    pub fn with_word_transform(
        mut self,
        transform: Box<dyn WordTransform + Send + Sync>,
    ) -> Self {
        self.word_pp = Some(transform);
        self
    }

    pub fn document_refs(&self) -> &[DocumentRef] {
        &self.refs
    }

    pub fn vocabulary(&self) -> &LabelVocabulary {
        &self.vocab
    }

    /// The error-propagating access path: resolve, look up rows,
    /// align, transform. Every failure (out-of-range dataset
    /// index, I/O, malformed predictionstring, unknown type,
    /// out-of-range word index) is fatal for this one access and
    /// surfaces to the caller.
    pub fn sample(&self, idx: usize) -> Result<LabeledDocument> {
        let doc_ref = self.refs.get(idx).with_context(|| {
            format!("document index {idx} out of range ({} documents)", self.refs.len())
        })?;
        let doc = doc_ref.resolve()?;
        let rows = self.index.rows_for(&self.table, &doc.id);

        let (words, labels) = align(&doc.text, &rows, &self.vocab)
            .with_context(|| format!("aligning labels for document '{}'", doc.id))?;

        let words = match &self.word_pp {
            Some(transform) => transform.apply(words),
            None => words,
        };

        Ok(LabeledDocument { id: doc.id, words, labels })
    }
}

impl Dataset<LabeledDocument> for DiscourseDataset {
    fn get(&self, index: usize) -> Option<LabeledDocument> {
        if index >= self.refs.len() {
            return None;
        }
        // A corrupt annotation or unreadable file aborts the
        // access rather than feeding a silently mislabeled sample
        // into training.
        match self.sample(index) {
            Ok(sample) => Some(sample),
            Err(e) => panic!("dataset access {index} failed: {e:#}"),
        }
    }

    fn len(&self) -> usize {
        self.refs.len()
    }
}
