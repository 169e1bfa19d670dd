// ============================================================
// Dataset Exporter
// ============================================================
// Writes prepared samples to disk for downstream training:
//
//   <out_dir>/train.jsonl       — one LabeledDocument per line
//   <out_dir>/val.jsonl         — same format, validation split
//   <out_dir>/label_counts.csv  — words covered per category
//
// Example label_counts.csv:
//   label,code,word_count
//   None,0,48211
//   Claim,1,10342
//   Evidence,2,21095
//
// JSONL keeps each document self-contained, so a training loader
// can stream the file line by line without holding the whole
// split in memory.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::dataset::LabeledDocument;
use crate::domain::vocabulary::LabelVocabulary;

pub struct DatasetExporter {
    dir: PathBuf,
}

impl DatasetExporter {
    /// Create an exporter rooted at `dir`, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Write one split as JSONL, one serialized sample per line.
    pub fn write_split(&self, name: &str, samples: &[LabeledDocument]) -> Result<PathBuf> {
        let path = self.dir.join(format!("{name}.jsonl"));
        let file = fs::File::create(&path)
            .with_context(|| format!("cannot create '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        for sample in samples {
            serde_json::to_writer(&mut writer, sample)?;
            writeln!(writer)?;
        }
        writer.flush()?;

        tracing::info!("Wrote {} samples to '{}'", samples.len(), path.display());
        Ok(path)
    }

    /// Write the per-category word-count report. Counts come from
    /// the label sequences themselves, so the report reflects
    /// exactly what was exported — overlaps already resolved.
    pub fn write_label_counts(
        &self,
        vocab: &LabelVocabulary,
        samples: &[LabeledDocument],
    ) -> Result<PathBuf> {
        let path = self.dir.join("label_counts.csv");
        let file = fs::File::create(&path)
            .with_context(|| format!("cannot create '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "label,code,word_count")?;
        for (name, code) in vocab.entries() {
            let count: usize = samples
                .iter()
                .map(|s| s.labels.iter().filter(|&&l| l == code).count())
                .sum();
            writeln!(writer, "{name},{code},{count}")?;
        }
        writer.flush()?;

        tracing::info!("Wrote label counts to '{}'", path.display());
        Ok(path)
    }
}
