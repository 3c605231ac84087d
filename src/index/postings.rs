//! Postings lists and the inverted index (§3, §9).
//!
//! Postings are stored as a contiguous sequence of `(doc_id, count)` pairs
//! rather than the flat `[docid, count, docid, count, ...]` integer array
//! the source used — same memory layout, a safer typed API.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One entry in a term's postings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: u32,
    pub count: u32,
}

pub type PostingsList = Vec<Posting>;

/// `token_id -> PostingsList`. Keys coincide exactly with the lexicon's values.
pub type InvertedIndex = AHashMap<u32, PostingsList>;

/// Checks the ascending-docid invariant (§3, §8) for one postings list.
pub fn is_strictly_ascending(postings: &[Posting]) -> bool {
    postings.windows(2).all(|w| w[0].doc_id < w[1].doc_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_check_accepts_sorted_list() {
        let postings = vec![
            Posting { doc_id: 0, count: 1 },
            Posting { doc_id: 3, count: 2 },
            Posting { doc_id: 7, count: 1 },
        ];
        assert!(is_strictly_ascending(&postings));
    }

    #[test]
    fn ascending_check_rejects_duplicate_or_out_of_order() {
        let dup = vec![
            Posting { doc_id: 0, count: 1 },
            Posting { doc_id: 0, count: 2 },
        ];
        assert!(!is_strictly_ascending(&dup));

        let out_of_order = vec![
            Posting { doc_id: 3, count: 1 },
            Posting { doc_id: 1, count: 2 },
        ];
        assert!(!is_strictly_ascending(&out_of_order));
    }
}
