// ============================================================
// Vocabulary Store
// ============================================================
// Manages label-vocabulary discovery, saving, and loading.
//
// A trained model's output classes are bound to the exact
// category → code assignment used at preparation time, so the
// vocabulary saved next to an export is authoritative: if
// vocabulary.json exists it is loaded as-is, and discovery from
// the annotation table only happens on the first run.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::annotation::AnnotationRow;
use crate::domain::vocabulary::LabelVocabulary;

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn vocab_path(&self) -> PathBuf {
        self.dir.join("vocabulary.json")
    }

    /// Load an existing vocabulary, or discover one from the table
    /// and save it for every later run.
    pub fn load_or_build(&self, table: &[AnnotationRow]) -> Result<LabelVocabulary> {
        if self.vocab_path().exists() {
            tracing::info!("Loading existing vocabulary from '{}'", self.vocab_path().display());
            self.load()
        } else {
            tracing::info!("Discovering vocabulary from {} annotation rows", table.len());
            let vocab = LabelVocabulary::from_table(table);
            self.save(&vocab)?;
            Ok(vocab)
        }
    }

    /// Load a previously saved vocabulary from JSON.
    pub fn load(&self) -> Result<LabelVocabulary> {
        let path = self.vocab_path();
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read vocabulary '{}'", path.display()))?;
        let vocab: LabelVocabulary = serde_json::from_str(&json)
            .with_context(|| format!("malformed vocabulary '{}'", path.display()))?;
        Ok(vocab)
    }

    /// Save the vocabulary as pretty-printed JSON.
    pub fn save(&self, vocab: &LabelVocabulary) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create '{}'", self.dir.display()))?;

        let path = self.vocab_path();
        std::fs::write(&path, serde_json::to_string_pretty(vocab)?)
            .with_context(|| format!("cannot write vocabulary '{}'", path.display()))?;

        tracing::info!(
            "Saved vocabulary ({} categories) to '{}'",
            vocab.len(),
            path.display()
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<AnnotationRow> {
        vec![
            AnnotationRow::new("d1", "Claim", "0"),
            AnnotationRow::new("d2", "Evidence", "1"),
        ]
    }

    #[test]
    fn test_discovers_and_saves_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path());

        let vocab = store.load_or_build(&table()).unwrap();
        assert_eq!(vocab.len(), 3);
        assert!(dir.path().join("vocabulary.json").exists());
    }

    #[test]
    fn test_saved_vocabulary_wins_over_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path());
        store.load_or_build(&table()).unwrap();

        // Second run sees a different table but must reload the
        // saved assignment untouched
        let other = vec![AnnotationRow::new("d9", "Rebuttal", "0")];
        let vocab = store.load_or_build(&other).unwrap();
        assert!(vocab.code_of("Claim").is_ok());
        assert!(vocab.code_of("Rebuttal").is_err());
    }

    #[test]
    fn test_load_rejects_vocabulary_without_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("vocabulary.json"), r#"{"Claim": 1}"#).unwrap();

        // A hand-edited file missing the background entry must fail
        // at load time, not later inside alignment
        let store = VocabStore::new(dir.path());
        let err = store.load_or_build(&table()).unwrap_err();
        assert!(format!("{err:#}").contains("no \"None\" entry"));
    }

    #[test]
    fn test_round_trips_codes_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path());
        let original = LabelVocabulary::from_table(&table());

        store.save(&original).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(original.entries(), reloaded.entries());
    }
}
