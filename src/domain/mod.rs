// ============================================================
// Domain Layer
// ============================================================
// Pure structs and traits that define the core concepts of the
// system — no I/O, no dataset-framework types, no CSV parsing.
//
// This layer defines what things ARE:
//   - an annotated span          (annotation.rs)
//   - a document of raw text     (document.rs)
//   - the category → code map    (vocabulary.rs)
//   - the pluggable seams        (traits.rs)
//
// Everything here is trivially unit-testable and carries no
// dependency on where the data came from.

// One span annotation row from the annotation table
pub mod annotation;

// A document: stable id plus raw text
pub mod document;

// Discourse category → integer label code mapping
pub mod vocabulary;

// Core abstractions (traits) that other layers implement
pub mod traits;
