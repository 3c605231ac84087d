//! Per-document metadata (§3).
//!
//! Represented as a `Vec<DocMeta>` indexed by `internal_id` rather than an
//! explicit map: since internal ids are dense over `0..num_docs`, a vector
//! enforces the "keys coincide with `0..num_docs-1`" invariant by construction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMeta {
    pub docno: String,
    pub headline: String,
    pub date: String,
    pub length: u32,
}

pub type MetadataMap = Vec<DocMeta>;

/// Average document length over the whole collection, used as `avgdl` in BM25 (§4.6).
pub fn average_doc_length(metadata: &MetadataMap) -> f64 {
    if metadata.is_empty() {
        return 0.0;
    }
    let total: u64 = metadata.iter().map(|m| m.length as u64).sum();
    total as f64 / metadata.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(length: u32) -> DocMeta {
        DocMeta {
            docno: "LA010189-0001".to_string(),
            headline: "h".to_string(),
            date: "010189".to_string(),
            length,
        }
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average_doc_length(&Vec::new()), 0.0);
    }

    #[test]
    fn average_is_computed_in_floating_point() {
        let metadata = vec![meta(3), meta(4)];
        assert_eq!(average_doc_length(&metadata), 3.5);
    }
}
