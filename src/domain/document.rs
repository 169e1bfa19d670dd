// ============================================================
// Document Domain Type
// ============================================================
// Represents a single raw document. A plain data struct with a
// stable id and the unprocessed text — by the time a Document
// exists, any file reading has already happened in the data
// layer.

use serde::{Deserialize, Serialize};

/// One text sample identified by a stable id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier — for file-backed corpora this is the
    /// filename stem, which is also the id the annotation table
    /// uses to reference the document
    pub id: String,

    /// The full raw text, untouched: labels are always computed
    /// against a plain whitespace split of exactly this string
    pub text: String,
}

impl Document {
    /// Create a new Document. Takes impl Into<String> so callers
    /// can pass &str or String.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id:   id.into(),
            text: text.into(),
        }
    }

    /// Number of whitespace-delimited words — the N that every
    /// label sequence for this document must match in length.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
