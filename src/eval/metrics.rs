//! Effectiveness metrics: AP, P@10, NDCG@n, Time-Biased Gain (§4.8).

use crate::config::TbgParams;
use ahash::AHashSet;

/// Average Precision over the full ranked list.
pub fn average_precision(ranked_docnos: &[String], relevant: &AHashSet<String>) -> f64 {
    if relevant.is_empty() {
        return 0.0;
    }

    let mut relevant_count = 0usize;
    let mut sum_precision = 0.0;

    for (i, docno) in ranked_docnos.iter().enumerate() {
        let rank = i + 1;
        if relevant.contains(docno) {
            relevant_count += 1;
            sum_precision += relevant_count as f64 / rank as f64;
        }
    }

    sum_precision / relevant.len() as f64
}

/// Precision at a fixed cutoff `k` (denominator is always `k`, per spec).
pub fn precision_at_k(ranked_docnos: &[String], relevant: &AHashSet<String>, k: usize) -> f64 {
    let relevant_count = ranked_docnos
        .iter()
        .take(k)
        .filter(|d| relevant.contains(*d))
        .count();
    relevant_count as f64 / k as f64
}

fn dcg_term(rank_one_based: usize) -> f64 {
    1.0 / (rank_one_based as f64 + 1.0).log2()
}

/// DCG@n over the ranked list.
pub fn dcg_at_n(ranked_docnos: &[String], relevant: &AHashSet<String>, n: usize) -> f64 {
    ranked_docnos
        .iter()
        .take(n)
        .enumerate()
        .filter(|(_, docno)| relevant.contains(*docno))
        .map(|(i, _)| dcg_term(i + 1))
        .sum()
}

/// IDCG@n: the DCG of a perfectly-ranked result for this topic's relevant set.
pub fn idcg_at_n(num_relevant: usize, n: usize) -> f64 {
    (1..=num_relevant.min(n)).map(dcg_term).sum()
}

/// NDCG@n = DCG@n / IDCG@n, or 0 if IDCG@n is 0 (no relevant documents).
pub fn ndcg_at_n(ranked_docnos: &[String], relevant: &AHashSet<String>, n: usize) -> f64 {
    let idcg = idcg_at_n(relevant.len(), n);
    if idcg == 0.0 {
        return 0.0;
    }
    dcg_at_n(ranked_docnos, relevant, n) / idcg
}

/// Per-document expected read time, in seconds (§4.8).
fn doc_read_time(doc_length: f64) -> f64 {
    0.018 * doc_length + 7.8
}

/// Time-Biased Gain over the ranked list (§4.8).
///
/// `doc_length` resolves a docno to its token-count length; documents the
/// caller cannot resolve (absent from the index) are treated as length 0,
/// which per `doc_read_time` still contributes the constant 7.8s base
/// read time (the formula has no zero-length special case, so neither does
/// this function).
pub fn time_biased_gain(
    ranked_docnos: &[String],
    relevant: &AHashSet<String>,
    doc_length: impl Fn(&str) -> f64,
    params: &TbgParams,
) -> f64 {
    let is_relevant: Vec<bool> = ranked_docnos.iter().map(|d| relevant.contains(d)).collect();
    let gain = params.p_click_rel * params.p_save_rel;
    let ln2 = std::f64::consts::LN_2;

    let mut total = 0.0;
    for (k_idx, &rel) in is_relevant.iter().enumerate() {
        if !rel {
            continue;
        }
        let mut time_before = 0.0;
        for i in 0..k_idx {
            let click_prob = if is_relevant[i] {
                params.p_click_rel
            } else {
                params.p_click_nonrel
            };
            time_before += params.t_summary + doc_read_time(doc_length(&ranked_docnos[i])) * click_prob;
        }
        total += gain * (-time_before * ln2 / params.half_life).exp();
    }

    total
}
