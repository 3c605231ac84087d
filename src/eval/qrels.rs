//! Qrels parsing: `topicId iter docno judgment`, whitespace-separated (§4.8, §6).

use crate::error::{RetrievalError, Result};
use ahash::{AHashMap, AHashSet};

/// `topicId -> set of docnos judged relevant (judgment > 0)`.
pub type RelevanceMap = AHashMap<u32, AHashSet<String>>;

pub fn parse_qrels(contents: &str) -> Result<RelevanceMap> {
    let mut relevant: RelevanceMap = AHashMap::default();

    for (idx, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(RetrievalError::MalformedQrel {
                line_no,
                raw: raw_line.to_string(),
                reason: format!("expected 4 whitespace-separated fields, found {}", fields.len()),
            });
        }

        let topic_id: u32 = fields[0].parse().map_err(|_| RetrievalError::MalformedQrel {
            line_no,
            raw: raw_line.to_string(),
            reason: format!("topicId {:?} is not an integer", fields[0]),
        })?;
        let docno = fields[2];
        let judgment: i32 = fields[3].parse().map_err(|_| RetrievalError::MalformedQrel {
            line_no,
            raw: raw_line.to_string(),
            reason: format!("judgment {:?} is not an integer", fields[3]),
        })?;

        if judgment > 0 {
            relevant.entry(topic_id).or_default().insert(docno.to_string());
        }
    }

    Ok(relevant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_positive_judgments_are_relevant() {
        let contents = "401 0 LA010189-0001 1\n401 0 LA010189-0002 0\n401 0 LA010189-0003 -1\n";
        let relevant = parse_qrels(contents).unwrap();
        let set = &relevant[&401];
        assert!(set.contains("LA010189-0001"));
        assert!(!set.contains("LA010189-0002"));
        assert!(!set.contains("LA010189-0003"));
    }

    #[test]
    fn groups_by_topic_id() {
        let contents = "401 0 LA010189-0001 1\n402 0 LA010189-0002 1\n";
        let relevant = parse_qrels(contents).unwrap();
        assert_eq!(relevant.len(), 2);
    }

    #[test]
    fn malformed_line_is_rejected() {
        assert!(parse_qrels("401 0 LA010189-0001\n").is_err());
        assert!(parse_qrels("abc 0 LA010189-0001 1\n").is_err());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let contents = "401 0 LA010189-0001 1\n\n402 0 LA010189-0002 1\n";
        assert!(parse_qrels(contents).is_ok());
    }
}
