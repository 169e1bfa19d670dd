// ============================================================
// InspectUseCase
// ============================================================
// Answers "what does the prepared dataset look like?" without
// writing anything:
//
//   Step 1: Read the annotation table      (data/corpus)
//   Step 2: Discover the label vocabulary  (domain/vocabulary)
//   Step 3: List document references       (data/corpus)
//   Step 4: Build the dataset              (data/dataset)
//   Step 5: Collect corpus statistics + preview samples

use anyhow::Result;
use burn::data::dataset::Dataset;

use crate::data::corpus::FeedbackCorpus;
use crate::data::dataset::{DiscourseDataset, LabeledDocument};
use crate::domain::traits::{CorpusSource, Lowercase};
use crate::domain::vocabulary::LabelVocabulary;

// ─── Inspection Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub data_dir:  String,
    pub show:      usize,
    pub lowercase: bool,
}

/// Everything the CLI needs to print about one corpus.
pub struct InspectReport {
    pub document_count:   usize,
    pub annotation_rows:  usize,
    pub vocabulary:       Vec<(String, i64)>,
    pub preview:          Vec<LabeledDocument>,
}

// ─── InspectUseCase ───────────────────────────────────────────────────────────
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<InspectReport> {
        let cfg = &self.config;

        // ── Step 1: Read the annotation table ─────────────────────────────────
        tracing::info!("Inspecting corpus at '{}'", cfg.data_dir);
        let corpus = FeedbackCorpus::new(&cfg.data_dir);
        let table = corpus.annotation_table()?;

        // ── Step 2: Discover the vocabulary from the table ────────────────────
        let vocab = LabelVocabulary::from_table(&table);
        tracing::info!("Discovered {} label categories", vocab.len());

        // ── Step 3 + 4: Build the dataset over all documents ──────────────────
        let refs = corpus.document_refs()?;
        let annotation_rows = table.len();
        let mut dataset = DiscourseDataset::new(table, refs, vocab);
        if cfg.lowercase {
            dataset = dataset.with_word_transform(Box::new(Lowercase));
        }

        // ── Step 5: Preview the first samples via the same access
        //    path a training loader would use ───────────────────────────────────
        let mut preview = Vec::new();
        for idx in 0..cfg.show.min(dataset.len()) {
            preview.push(dataset.sample(idx)?);
        }

        Ok(InspectReport {
            document_count:  dataset.len(),
            annotation_rows,
            vocabulary:      dataset.vocabulary().entries(),
            preview,
        })
    }
}
