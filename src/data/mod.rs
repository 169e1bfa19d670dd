// ============================================================
// Data Pipeline
// ============================================================
// Everything from raw competition files to training-ready
// (words, labels) samples.
//
// The pipeline flows in this order:
//
//   train.csv + train/*.txt
//       │
//       ▼
//   FeedbackCorpus     → reads the annotation table and lists documents
//       │
//       ▼
//   AnnotationIndex    → groups table rows by document id
//       │
//       ▼
//   align()            → one label per whitespace word, spans overlaid
//       │
//       ▼
//   DiscourseDataset   → implements Burn's Dataset trait
//       │
//       ▼
//   split_refs()       → reproducible train/validation split
//
// Each module is responsible for exactly one step, so each step
// is independently testable and replaceable.

/// Reads the Kaggle-style corpus directory (CSV table + .txt files)
pub mod corpus;

/// Groups annotation rows by document id for O(1) lookup
pub mod index;

/// The label-alignment core: spans → dense per-word labels
pub mod aligner;

/// Implements Burn's Dataset trait over (words, labels) samples
pub mod dataset;

/// Seeded shuffle-and-split of document references
pub mod splitter;
