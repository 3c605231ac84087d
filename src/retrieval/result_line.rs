//! The TREC-style result line shared by both engines' output and the
//! evaluator's input: `topicId Q0 docno rank score runTag` (§4.5, §4.6, §4.8, §6).

use crate::error::{RetrievalError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultLine {
    pub topic_id: u32,
    pub docno: String,
    pub rank: usize,
    pub score: f64,
    pub run_tag: String,
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Q0 {} {} {} {}",
            self.topic_id, self.docno, self.rank, self.score, self.run_tag
        )
    }
}

/// Parses and strictly validates one result line (§4.8, §6).
///
/// `line_no` is 1-based, used only for error messages.
pub fn parse_strict(raw: &str, line_no: usize) -> Result<ResultLine> {
    let malformed = |reason: String| RetrievalError::MalformedResultLine {
        line_no,
        raw: raw.to_string(),
        reason,
    };

    let fields: Vec<&str> = raw.split(' ').collect();
    if fields.len() != 6 {
        return Err(malformed(format!(
            "expected 6 space-separated fields, found {}",
            fields.len()
        )));
    }

    let [topic_id_s, q0, docno, rank_s, score_s, run_tag] = fields[..] else {
        unreachable!("length checked above");
    };

    let topic_id: u32 = topic_id_s
        .parse()
        .map_err(|_| malformed(format!("topicId {topic_id_s:?} is not an integer")))?;

    if q0 != "Q0" {
        return Err(malformed(format!("expected literal \"Q0\", found {q0:?}")));
    }

    if docno.len() != 13 {
        return Err(malformed(format!(
            "docno {docno:?} has length {} (expected 13)",
            docno.len()
        )));
    }

    let rank: usize = rank_s
        .parse()
        .map_err(|_| malformed(format!("rank {rank_s:?} is not an integer")))?;

    let score: f64 = score_s
        .parse()
        .map_err(|_| malformed(format!("score {score_s:?} is not a float")))?;

    if run_tag.is_empty() {
        return Err(malformed("runTag must be non-empty".to_string()));
    }

    Ok(ResultLine {
        topic_id,
        docno: docno.to_string(),
        rank,
        score,
        run_tag: run_tag.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_per_spec() {
        let line = ResultLine {
            topic_id: 401,
            docno: "LA010189-0001".to_string(),
            rank: 1,
            score: 12.5,
            run_tag: "bm25".to_string(),
        };
        assert_eq!(line.to_string(), "401 Q0 LA010189-0001 1 12.5 bm25");
    }

    #[test]
    fn round_trips_through_parse() {
        let raw = "401 Q0 LA010189-0001 1 12.5 bm25";
        let parsed = parse_strict(raw, 1).unwrap();
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_strict("401 Q0 LA010189-0001 1 12.5", 1).is_err());
    }

    #[test]
    fn rejects_non_q0_literal() {
        assert!(parse_strict("401 QQ LA010189-0001 1 12.5 bm25", 1).is_err());
    }

    #[test]
    fn rejects_wrong_length_docno() {
        assert!(parse_strict("401 Q0 TOOSHORT 1 12.5 bm25", 1).is_err());
    }

    #[test]
    fn rejects_non_integer_topic_or_rank() {
        assert!(parse_strict("abc Q0 LA010189-0001 1 12.5 bm25", 1).is_err());
        assert!(parse_strict("401 Q0 LA010189-0001 abc 12.5 bm25", 1).is_err());
    }

    #[test]
    fn rejects_empty_run_tag() {
        assert!(parse_strict("401 Q0 LA010189-0001 1 12.5 ", 1).is_err());
    }
}
