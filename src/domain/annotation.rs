// ============================================================
// Annotation Row Domain Type
// ============================================================
// One row of the annotation table: a single discourse span in a
// single document. The table is a flat CSV with many rows per
// document; grouping rows back to their document is the job of
// the AnnotationIndex in the data layer.
//
// The predictionstring column encodes the span as a whitespace-
// separated list of word positions, e.g. "4 5 6 7". Positions
// index into the document's whitespace-tokenized word sequence.
// That they are valid indices is an assumed precondition of the
// incoming data, not something this type checks at parse time —
// the aligner enforces bounds against the actual word count.

use serde::{Deserialize, Serialize};

use crate::error::AlignError;

/// One span annotation: (document, discourse type, word positions).
///
/// Field names match the annotation CSV header so the csv crate
/// can deserialize rows directly via serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationRow {
    /// Stable id of the document this span belongs to
    pub id: String,

    /// The label category of the span, e.g. "Claim" or "Evidence"
    pub discourse_type: String,

    /// Whitespace-separated word positions covered by the span
    pub predictionstring: String,
}

impl AnnotationRow {
    pub fn new(
        id: impl Into<String>,
        discourse_type: impl Into<String>,
        predictionstring: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            discourse_type: discourse_type.into(),
            predictionstring: predictionstring.into(),
        }
    }

    /// Decode predictionstring into an ordered list of word indices.
    ///
    /// An empty predictionstring decodes to an empty list. A token
    /// that does not parse as an integer is a
    /// MalformedPredictionString error — the row is unusable.
    /// Indices decode as i64 so a negative position survives
    /// parsing and fails the bounds check in the aligner, where
    /// the word count is known.
    pub fn word_indices(&self) -> Result<Vec<i64>, AlignError> {
        self.predictionstring
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| AlignError::MalformedPredictionString {
                        token: token.to_string(),
                    })
            })
            .collect()
    }
}
