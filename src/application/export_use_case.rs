// ============================================================
// ExportUseCase
// ============================================================
// Runs the full preparation pipeline and writes the result:
//
//   Step 1: Read the annotation table      (data/corpus)
//   Step 2: Load or build the vocabulary   (infra/vocab_store)
//   Step 3: List document references       (data/corpus)
//   Step 4: Train/validation split         (data/splitter)
//   Step 5: Align every document           (data/dataset)
//   Step 6: Write JSONL splits + report    (infra/exporter)
//
// Any alignment failure aborts the export: a partially written
// dataset with silently skipped documents is worse than no
// dataset.

use anyhow::Result;
use burn::data::dataset::Dataset;

use crate::data::corpus::FeedbackCorpus;
use crate::data::dataset::{DiscourseDataset, LabeledDocument};
use crate::data::splitter::split_refs;
use crate::domain::traits::{CorpusSource, Lowercase};
use crate::infra::exporter::DatasetExporter;
use crate::infra::vocab_store::VocabStore;

// ─── Export Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub data_dir:       String,
    pub out_dir:        String,
    pub train_fraction: f64,
    pub seed:           u64,
    pub lowercase:      bool,
}

/// What the export produced, for the CLI to summarize.
pub struct ExportSummary {
    pub train_count: usize,
    pub val_count:   usize,
    pub out_dir:     String,
}

// ─── ExportUseCase ────────────────────────────────────────────────────────────
pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<ExportSummary> {
        let cfg = &self.config;

        // ── Step 1: Read the annotation table ─────────────────────────────────
        tracing::info!("Exporting corpus '{}' to '{}'", cfg.data_dir, cfg.out_dir);
        let corpus = FeedbackCorpus::new(&cfg.data_dir);
        let table = corpus.annotation_table()?;

        // ── Step 2: Load or build the vocabulary ──────────────────────────────
        // A saved vocabulary in the output directory is
        // authoritative so re-exports keep the same codes
        let store = VocabStore::new(&cfg.out_dir);
        let vocab = store.load_or_build(&table)?;

        // ── Step 3 + 4: Split the document references ─────────────────────────
        let refs = corpus.document_refs()?;
        let (train_refs, val_refs) = split_refs(refs, cfg.train_fraction, cfg.seed);
        tracing::info!(
            "Split: {} train, {} validation documents",
            train_refs.len(),
            val_refs.len()
        );

        // ── Step 5: Align every document in both splits ───────────────────────
        let mut train_ds = DiscourseDataset::new(table.clone(), train_refs, vocab.clone());
        let mut val_ds = DiscourseDataset::new(table, val_refs, vocab.clone());
        if cfg.lowercase {
            train_ds = train_ds.with_word_transform(Box::new(Lowercase));
            val_ds = val_ds.with_word_transform(Box::new(Lowercase));
        }
        let train_samples = collect_samples(&train_ds)?;
        let val_samples = collect_samples(&val_ds)?;

        // ── Step 6: Write splits and the label-count report ───────────────────
        let exporter = DatasetExporter::new(&cfg.out_dir)?;
        exporter.write_split("train", &train_samples)?;
        exporter.write_split("val", &val_samples)?;

        let all_samples: Vec<LabeledDocument> = train_samples
            .iter()
            .chain(val_samples.iter())
            .cloned()
            .collect();
        exporter.write_label_counts(&vocab, &all_samples)?;

        Ok(ExportSummary {
            train_count: train_samples.len(),
            val_count:   val_samples.len(),
            out_dir:     cfg.out_dir.clone(),
        })
    }
}

/// Materialize every sample of one dataset through the
/// error-propagating access path.
fn collect_samples(dataset: &DiscourseDataset) -> Result<Vec<LabeledDocument>> {
    (0..dataset.len()).map(|idx| dataset.sample(idx)).collect()
}
