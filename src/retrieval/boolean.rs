//! Boolean-AND engine: sort-merge intersection over ascending-docid postings (§4.5).

use crate::index::loader::LoadedIndex;
use crate::index::postings::PostingsList;
use crate::text::tokenize_and_stem;
use ahash::AHashSet;

/// Tokenizes, stems, maps to the lexicon and de-duplicates a query,
/// silently dropping out-of-vocabulary terms (§4.5).
fn query_token_ids(index: &LoadedIndex, query: &str) -> Vec<u32> {
    let mut seen = AHashSet::default();
    let mut ids = Vec::new();
    for token in tokenize_and_stem(query) {
        if let Some(id) = index.lexicon.get(&token) {
            if seen.insert(id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Intersects two ascending-docid postings lists via a two-pointer merge,
/// advancing whichever side is behind.
fn intersect_doc_ids(left: &[u32], right: &PostingsList) -> Vec<u32> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    while i < left.len() && j < right.len() {
        let l = left[i];
        let r = right[j].doc_id;
        match l.cmp(&r) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                result.push(l);
                i += 1;
                j += 1;
            }
        }
    }
    result
}

/// Runs the Boolean-AND query, returning matching `internal_id`s in
/// ascending order — the natural order of the sort-merge intersection.
pub fn search_and(index: &LoadedIndex, query: &str) -> Vec<u32> {
    let term_ids = query_token_ids(index, query);

    if term_ids.is_empty() {
        return Vec::new();
    }

    // Intersecting the shortest postings list first is a valid optimization
    // that never changes the result, only the constant factor.
    let mut term_ids = term_ids;
    term_ids.sort_by_key(|id| {
        index
            .inverted
            .get(id)
            .map(PostingsList::len)
            .unwrap_or(0)
    });

    let mut term_ids_iter = term_ids.into_iter();
    let first_id = term_ids_iter.next().expect("checked non-empty above");
    let mut current: Vec<u32> = index
        .inverted
        .get(&first_id)
        .map(|postings| postings.iter().map(|p| p.doc_id).collect())
        .unwrap_or_default();

    for term_id in term_ids_iter {
        if current.is_empty() {
            break;
        }
        let empty = PostingsList::new();
        let postings = index.inverted.get(&term_id).unwrap_or(&empty);
        current = intersect_doc_ids(&current, postings);
    }

    current
}
