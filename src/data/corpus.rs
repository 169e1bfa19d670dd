// ============================================================
// Feedback Corpus Accessor
// ============================================================
// Reads a Kaggle-style competition directory:
//
//   <data_dir>/train.csv               — the annotation table
//   <data_dir>/sample_submission.csv   — submission format
//   <data_dir>/train/<id>.txt          — one text file per document
//
// train.csv carries at least {id, discourse_type,
// predictionstring}; the csv crate deserializes each row straight
// into an AnnotationRow via serde, ignoring any extra columns the
// competition file carries (character offsets, raw span text).
//
// Document ids are the filename stems of the .txt files, which is
// exactly how the annotation table references them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::dataset::DocumentRef;
use crate::domain::annotation::AnnotationRow;
use crate::domain::document::Document;
use crate::domain::traits::CorpusSource;

/// One row of sample_submission.csv, kept in its on-disk shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub id: String,
    pub class: String,
    pub predictionstring: String,
}

/// Accessor over one competition data directory.
pub struct FeedbackCorpus {
    csv_path:    PathBuf,
    sample_path: PathBuf,
    text_dir:    PathBuf,
}

impl FeedbackCorpus {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            csv_path:    dir.join("train.csv"),
            sample_path: dir.join("sample_submission.csv"),
            text_dir:    dir.join("train"),
        }
    }

    /// Read the submission-format file, row by row.
    pub fn sample_submission(&self) -> Result<Vec<SubmissionRow>> {
        read_csv(&self.sample_path)
    }

    /// Read every document eagerly as (id, text) pairs, in the
    /// same order as document_refs().
    pub fn all_documents(&self) -> Result<Vec<Document>> {
        self.document_refs()?
            .iter()
            .map(DocumentRef::resolve)
            .collect()
    }
}

impl CorpusSource for FeedbackCorpus {
    fn annotation_table(&self) -> Result<Vec<AnnotationRow>> {
        let table: Vec<AnnotationRow> = read_csv(&self.csv_path)?;
        tracing::info!(
            "Loaded {} annotation rows from '{}'",
            table.len(),
            self.csv_path.display()
        );
        Ok(table)
    }

    fn document_refs(&self) -> Result<Vec<DocumentRef>> {
        let entries = fs::read_dir(&self.text_dir).with_context(|| {
            format!("cannot read text directory '{}'", self.text_dir.display())
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("txt") {
                paths.push(path);
            }
        }

        // Directory iteration order is platform-dependent; sort so
        // dataset index i always means the same document.
        paths.sort();

        tracing::info!(
            "Found {} document files in '{}'",
            paths.len(),
            self.text_dir.display()
        );
        Ok(paths.into_iter().map(DocumentRef::File).collect())
    }
}

/// Deserialize every record of one headered CSV file.
fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("cannot open '{}'", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T =
            record.with_context(|| format!("malformed record in '{}'", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}
