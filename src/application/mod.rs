// ============================================================
// Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one goal each:
//
//   inspect — load the corpus, build the dataset, report what
//             the prepared data looks like
//   export  — prepare everything and write train/val splits
//             plus the vocabulary to disk
//
// Rules for this layer: no alignment logic, no printing (the CLI
// owns that), no raw file-format knowledge — only workflow
// coordination.

// Corpus statistics and sample preview
pub mod inspect_use_case;

// Prepared-dataset export workflow
pub mod export_use_case;
