//! BM25 engine: term-at-a-time scoring with a per-docid accumulator (§4.6).

use crate::config::Bm25Params;
use crate::index::loader::LoadedIndex;
use crate::text::tokenize_and_stem;
use ahash::AHashMap;

/// One scored hit, before the top-k truncation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDoc {
    pub doc_id: u32,
    pub score: f64,
}

/// Scores every document matching any query term, sorts descending by
/// score (ties broken by ascending `internal_id` for a deterministic total
/// order — see §9), and truncates to `top_k`.
pub fn search_bm25(index: &LoadedIndex, query: &str, params: &Bm25Params, top_k: usize) -> Vec<ScoredDoc> {
    let tokens = tokenize_and_stem(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut query_freq: AHashMap<u32, u32> = AHashMap::default();
    for token in &tokens {
        if let Some(id) = index.lexicon.get(token) {
            *query_freq.entry(id).or_insert(0) += 1;
        }
    }

    let n = index.num_docs as f64;
    let avgdl = index.avgdl;
    let mut accumulator: AHashMap<u32, f64> = AHashMap::default();

    for (&term_id, &qf) in &query_freq {
        let Some(postings) = index.inverted.get(&term_id) else {
            continue;
        };
        let n_t = postings.len() as f64;
        let idf = ((n - n_t + 0.5) / (n_t + 0.5)).ln();

        for posting in postings {
            let dl = index
                .doc_meta(posting.doc_id)
                .map(|m| m.length as f64)
                .unwrap_or(0.0);
            let f_d = posting.count as f64;
            let k = params.k1 * ((1.0 - params.b) + params.b * (dl / avgdl));
            let tf_component = ((params.k1 + 1.0) * f_d) / (k + f_d);
            let qf_component = ((params.k2 + 1.0) * qf as f64) / (params.k2 + qf as f64);
            let score_td = tf_component * qf_component * idf;

            *accumulator.entry(posting.doc_id).or_insert(0.0) += score_td;
        }
    }

    let mut scored: Vec<ScoredDoc> = accumulator
        .into_iter()
        .map(|(doc_id, score)| ScoredDoc { doc_id, score })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.doc_id.cmp(&b.doc_id))
    });
    scored.truncate(top_k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::IndexBuilder;
    use crate::parse::document::parse_record;
    use tempfile::tempdir;

    fn build_index(docs: &[(&str, &str)]) -> (tempfile::TempDir, LoadedIndex) {
        let dir = tempdir().unwrap();
        let index_dir = dir.path().join("idx");
        let mut builder = IndexBuilder::create(&index_dir).unwrap();
        for (docno, text) in docs {
            let raw = format!("<DOC><DOCNO>{docno}</DOCNO><TEXT>{text}</TEXT></DOC>");
            builder.add_record(&parse_record(&raw, 0).unwrap()).unwrap();
        }
        builder.finish().unwrap();
        let loaded = LoadedIndex::load(&index_dir).unwrap();
        (dir, loaded)
    }

    #[test]
    fn single_doc_single_term_is_returned() {
        let (_dir, index) = build_index(&[("LA010189-0001", "the quick brown fox jumps")]);
        let params = Bm25Params::default();
        let results = search_bm25(&index, "the quick brown fox", &params, 1000);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_id, 0);
    }

    #[test]
    fn more_relevant_doc_scores_higher() {
        let (_dir, index) = build_index(&[
            ("LA010189-0001", "fox fox fox fox fox"),
            ("LA010189-0002", "dog sleeps all day"),
        ]);
        let params = Bm25Params::default();
        let results = search_bm25(&index, "fox", &params, 1000);
        assert_eq!(results[0].doc_id, 0);
    }

    #[test]
    fn results_sorted_descending_by_score() {
        let (_dir, index) = build_index(&[
            ("LA010189-0001", "fox fox fox"),
            ("LA010189-0002", "fox"),
            ("LA010189-0003", "dog"),
        ]);
        let params = Bm25Params::default();
        let results = search_bm25(&index, "fox", &params, 1000);
        for window in results.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn top_k_is_respected() {
        let docs: Vec<(String, String)> = (0..20)
            .map(|i| (format!("LA0101{:02}-0001", i % 89 + 1), "fox".to_string()))
            .collect();
        let docs_ref: Vec<(&str, &str)> = docs.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        let (_dir, index) = build_index(&docs_ref);
        let params = Bm25Params::default();
        let results = search_bm25(&index, "fox", &params, 5);
        assert!(results.len() <= 5);
    }

    #[test]
    fn common_term_can_drive_idf_negative() {
        // "fox" appears in every document: n_t == N, so
        // ln((N - n_t + 0.5) / (n_t + 0.5)) is negative.
        let (_dir, index) = build_index(&[
            ("LA010189-0001", "fox"),
            ("LA010189-0002", "fox"),
            ("LA010189-0003", "fox"),
            ("LA010189-0004", "fox dog"),
        ]);
        let params = Bm25Params::default();
        let results = search_bm25(&index, "fox", &params, 1000);
        assert!(results.iter().any(|r| r.score < 0.0));
    }

    #[test]
    fn empty_query_yields_no_results() {
        let (_dir, index) = build_index(&[("LA010189-0001", "fox")]);
        let params = Bm25Params::default();
        assert!(search_bm25(&index, "   ", &params, 1000).is_empty());
    }
}
