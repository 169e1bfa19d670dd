// ============================================================
// Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns used by the use cases:
//
//   vocab_store.rs — label vocabulary persistence.
//                    The category → code assignment must be
//                    identical between data preparation and any
//                    later training or inference run, so the
//                    vocabulary is discovered once, saved as
//                    JSON, and reloaded from disk ever after.
//
//   exporter.rs    — prepared dataset output.
//                    Writes train/validation splits as JSONL
//                    (one labeled document per line) plus a
//                    label-count CSV summarizing how many words
//                    each category covers.

/// Label vocabulary saving, loading, and discovery
pub mod vocab_store;

/// JSONL split files and label-count CSV report
pub mod exporter;
