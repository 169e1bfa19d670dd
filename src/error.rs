// ============================================================
// Alignment Error Taxonomy
// ============================================================
// Every way the label-alignment core can fail, as a typed enum.
// None of these are recovered internally — they propagate to
// the caller as fatal for the single document access, and the
// surrounding pipeline decides whether to skip, log, or abort.
//
// The `anyhow` layers above convert these automatically via
// the std::error::Error impl that thiserror derives.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    /// The vocabulary was constructed without the mandatory
    /// background entry. Checked eagerly at construction so this
    /// fails fast, not at the first unannotated word.
    #[error("label vocabulary has no \"None\" entry")]
    MissingNoneLabel,

    /// An annotation row names a discourse type the vocabulary
    /// does not know about.
    #[error("discourse type '{0}' is not in the label vocabulary")]
    UnknownDiscourseType(String),

    /// A predictionstring index is outside [0, N) for the
    /// document's word count — negative or past the end. The
    /// reference behaviour is fail-fast — no clamping, no silent
    /// drop.
    #[error("word index {index} out of range for document with {word_count} words")]
    WordIndexOutOfRange { index: i64, word_count: usize },

    /// A predictionstring token could not be parsed as an integer.
    #[error("predictionstring token '{token}' is not a word index")]
    MalformedPredictionString { token: String },
}
