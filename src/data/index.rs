// ============================================================
// Annotation Index
// ============================================================
// The annotation table arrives flat: one row per span, many rows
// per document, thousands of documents interleaved. Scanning the
// whole table for every document access would make dataset
// indexing O(table size); grouping once up front makes it O(1)
// amortized per lookup.
//
// The index maps document id → positions of that document's rows
// in the table, preserving table order within each group. It is
// built once when the dataset is constructed and never mutated,
// so concurrent readers in a data-loading pipeline are safe
// without locking.
//
// Empty-case policy: a document id with zero rows — including an
// id the table has never seen — yields an empty position list,
// not an error. Such documents are valid inputs whose every word
// gets the background label.

use std::collections::HashMap;

use crate::domain::annotation::AnnotationRow;

/// Immutable document-id → row-positions map over one table.
#[derive(Debug)]
pub struct AnnotationIndex {
    groups: HashMap<String, Vec<usize>>,
}

impl AnnotationIndex {
    /// Group all table rows by document id. One pass, table order
    /// preserved within each group.
    pub fn build(table: &[AnnotationRow]) -> Self {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, row) in table.iter().enumerate() {
            groups.entry(row.id.clone()).or_default().push(position);
        }

        tracing::debug!(
            "Annotation index built: {} rows across {} documents",
            table.len(),
            groups.len()
        );

        Self { groups }
    }

    /// Row positions for one document, in table order. Empty for
    /// ids with no annotation rows.
    pub fn positions(&self, document_id: &str) -> &[usize] {
        self.groups
            .get(document_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Borrow one document's rows out of the table the index was
    /// built from, in table order.
    pub fn rows_for<'t>(
        &self,
        table: &'t [AnnotationRow],
        document_id: &str,
    ) -> Vec<&'t AnnotationRow> {
        self.positions(document_id)
            .iter()
            .map(|&position| &table[position])
            .collect()
    }

    /// Number of distinct document ids seen in the table.
    pub fn document_count(&self) -> usize {
        self.groups.len()
    }
}
