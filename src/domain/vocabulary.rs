// ============================================================
// Label Vocabulary
// ============================================================
// Maps discourse category names to integer label codes.
//
// The one hard requirement: a "None" entry must exist. "None" is
// the background label given to every word not covered by any
// annotated span, so alignment cannot start without it. The
// check happens at construction time — a vocabulary missing
// "None" is rejected immediately rather than failing on the
// first unannotated document.
//
// Codes are i64 because label sequences feed integer tensors in
// the downstream training loop.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::annotation::AnnotationRow;
use crate::error::AlignError;

/// The background category name every vocabulary must contain.
pub const NONE_LABEL: &str = "None";

/// Discourse category name → integer label code.
///
/// Immutable after construction; shared read-only by the dataset.
/// Serializes as the bare map, and deserialization routes through
/// `new` — a vocabulary file without a "None" entry is rejected at
/// load time, not at the first alignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, i64>", into = "HashMap<String, i64>")]
pub struct LabelVocabulary {
    codes: HashMap<String, i64>,
}

impl TryFrom<HashMap<String, i64>> for LabelVocabulary {
    type Error = AlignError;

    fn try_from(codes: HashMap<String, i64>) -> Result<Self, AlignError> {
        Self::new(codes)
    }
}

impl From<LabelVocabulary> for HashMap<String, i64> {
    fn from(vocab: LabelVocabulary) -> Self {
        vocab.codes
    }
}

impl LabelVocabulary {
    /// Build a vocabulary from an explicit category → code map.
    ///
    /// Fails with MissingNoneLabel if the map has no "None" entry.
    pub fn new(codes: HashMap<String, i64>) -> Result<Self, AlignError> {
        if !codes.contains_key(NONE_LABEL) {
            return Err(AlignError::MissingNoneLabel);
        }
        Ok(Self { codes })
    }

    /// Discover a vocabulary from an annotation table: "None" gets
    /// code 0, then every distinct discourse type in sorted order
    /// gets the next code. Sorting makes the assignment independent
    /// of table row order, so re-preparing the same corpus always
    /// yields the same codes.
    pub fn from_table(table: &[AnnotationRow]) -> Self {
        let types: BTreeSet<&str> = table
            .iter()
            .map(|row| row.discourse_type.as_str())
            .filter(|t| *t != NONE_LABEL)
            .collect();

        let mut codes = HashMap::with_capacity(types.len() + 1);
        codes.insert(NONE_LABEL.to_string(), 0);
        for (offset, discourse_type) in types.into_iter().enumerate() {
            codes.insert(discourse_type.to_string(), offset as i64 + 1);
        }

        Self { codes }
    }

    /// The code for a category; UnknownDiscourseType if absent.
    pub fn code_of(&self, discourse_type: &str) -> Result<i64, AlignError> {
        self.codes
            .get(discourse_type)
            .copied()
            .ok_or_else(|| AlignError::UnknownDiscourseType(discourse_type.to_string()))
    }

    /// The background code — guaranteed present by construction.
    pub fn none_code(&self) -> i64 {
        self.codes[NONE_LABEL]
    }

    /// Number of categories, background entry included.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// (category, code) pairs sorted by code, for reports and logs.
    pub fn entries(&self) -> Vec<(String, i64)> {
        let mut entries: Vec<(String, i64)> = self
            .codes
            .iter()
            .map(|(name, code)| (name.clone(), *code))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(pairs: &[(&str, i64)]) -> LabelVocabulary {
        let map = pairs
            .iter()
            .map(|(name, code)| (name.to_string(), *code))
            .collect();
        LabelVocabulary::new(map).unwrap()
    }

    #[test]
    fn test_missing_none_entry_fails_at_construction() {
        let mut map = HashMap::new();
        map.insert("Claim".to_string(), 1);
        assert_eq!(
            LabelVocabulary::new(map).unwrap_err(),
            AlignError::MissingNoneLabel
        );
    }

    #[test]
    fn test_code_lookup() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        assert_eq!(v.code_of("Claim").unwrap(), 1);
        assert_eq!(v.none_code(), 0);
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let v = vocab(&[("None", 0)]);
        assert_eq!(
            v.code_of("Rebuttal").unwrap_err(),
            AlignError::UnknownDiscourseType("Rebuttal".to_string())
        );
    }

    #[test]
    fn test_from_table_assigns_sorted_codes() {
        let table = vec![
            AnnotationRow::new("d1", "Evidence", "0"),
            AnnotationRow::new("d1", "Claim", "1"),
            AnnotationRow::new("d2", "Claim", "0"),
        ];
        let v = LabelVocabulary::from_table(&table);

        // "None" is always 0, then Claim < Evidence alphabetically
        assert_eq!(v.none_code(), 0);
        assert_eq!(v.code_of("Claim").unwrap(), 1);
        assert_eq!(v.code_of("Evidence").unwrap(), 2);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_deserialization_rejects_missing_none_entry() {
        let err = serde_json::from_str::<LabelVocabulary>(r#"{"Claim": 1}"#).unwrap_err();
        assert!(err.to_string().contains("no \"None\" entry"));
    }

    #[test]
    fn test_serde_round_trip_is_the_bare_map() {
        let v = vocab(&[("None", 0), ("Claim", 1)]);
        let json = serde_json::to_string(&v).unwrap();
        let back: LabelVocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(v.entries(), back.entries());
    }

    #[test]
    fn test_from_table_is_order_independent() {
        let a = LabelVocabulary::from_table(&[
            AnnotationRow::new("d1", "Claim", "0"),
            AnnotationRow::new("d1", "Evidence", "1"),
        ]);
        let b = LabelVocabulary::from_table(&[
            AnnotationRow::new("d1", "Evidence", "1"),
            AnnotationRow::new("d1", "Claim", "0"),
        ]);
        assert_eq!(a.entries(), b.entries());
    }
}
