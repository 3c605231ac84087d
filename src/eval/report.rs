//! Renders the fixed-format effectiveness table over the configured topic range (§4.8).

use crate::config::{RetrievalConfig, TbgParams};
use crate::eval::metrics::{average_precision, ndcg_at_n, precision_at_k, time_biased_gain};
use crate::eval::qrels::RelevanceMap;
use crate::retrieval::result_line::ResultLine;
use ahash::{AHashMap, AHashSet};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct TopicScore {
    pub topic_id: u32,
    pub ap: f64,
    pub p10: f64,
    pub ndcg10: f64,
    pub ndcg1000: f64,
    pub tbg: f64,
}

/// Groups raw result lines by topic id, sorting each topic's results by
/// score descending — the evaluator does not trust the `rank` field (§4.8).
pub fn group_by_topic(results: &[ResultLine]) -> AHashMap<u32, Vec<ResultLine>> {
    let mut grouped: AHashMap<u32, Vec<ResultLine>> = AHashMap::default();
    for result in results {
        grouped.entry(result.topic_id).or_default().push(result.clone());
    }
    for topic_results in grouped.values_mut() {
        topic_results.sort_by(|a, b| b.score.total_cmp(&a.score));
    }
    grouped
}

/// Scores one topic. Topics with no qrels entries and no results both
/// degrade to an empty relevant set / empty ranked list, which every metric
/// already maps to 0 — no special-casing needed for "missing topic".
pub fn evaluate_topic(
    topic_id: u32,
    results_by_topic: &AHashMap<u32, Vec<ResultLine>>,
    relevance: &RelevanceMap,
    doc_length: impl Fn(&str) -> f64,
    tbg_params: &TbgParams,
) -> TopicScore {
    let empty_relevant = AHashSet::default();
    let relevant = relevance.get(&topic_id).unwrap_or(&empty_relevant);

    let empty_results = Vec::new();
    let ranked: Vec<String> = results_by_topic
        .get(&topic_id)
        .unwrap_or(&empty_results)
        .iter()
        .map(|r| r.docno.clone())
        .collect();

    TopicScore {
        topic_id,
        ap: average_precision(&ranked, relevant),
        p10: precision_at_k(&ranked, relevant, 10),
        ndcg10: ndcg_at_n(&ranked, relevant, 10),
        ndcg1000: ndcg_at_n(&ranked, relevant, 1000),
        tbg: time_biased_gain(&ranked, relevant, doc_length, tbg_params),
    }
}

/// Runs the evaluator over every non-excluded topic in `config.topic_range`.
pub fn evaluate_all(
    results: &[ResultLine],
    relevance: &RelevanceMap,
    doc_length: impl Fn(&str) -> f64,
    config: &RetrievalConfig,
) -> Vec<TopicScore> {
    let results_by_topic = group_by_topic(results);
    config
        .topic_ids()
        .map(|topic_id| evaluate_topic(topic_id, &results_by_topic, relevance, &doc_length, &config.tbg))
        .collect()
}

/// Writes the fixed-format table: one row per topic, then an averages row.
pub fn render_table<W: Write>(mut out: W, scores: &[TopicScore]) -> io::Result<()> {
    writeln!(
        out,
        "{:<8}{:>10}{:>10}{:>10}{:>12}{:>10}",
        "topic", "AP", "P@10", "NDCG@10", "NDCG@1000", "TBG"
    )?;

    for score in scores {
        writeln!(
            out,
            "{:<8}{:>10.4}{:>10.4}{:>10.4}{:>12.4}{:>10.4}",
            score.topic_id, score.ap, score.p10, score.ndcg10, score.ndcg1000, score.tbg
        )?;
    }

    let n = scores.len().max(1) as f64;
    let avg = |f: fn(&TopicScore) -> f64| scores.iter().map(f).sum::<f64>() / n;
    writeln!(
        out,
        "{:<8}{:>10.4}{:>10.4}{:>10.4}{:>12.4}{:>10.4}",
        "avg",
        avg(|s| s.ap),
        avg(|s| s.p10),
        avg(|s| s.ndcg10),
        avg(|s| s.ndcg1000),
        avg(|s| s.tbg),
    )?;

    out.flush()
}
