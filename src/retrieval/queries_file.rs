//! Queries file parsing: two trimmed lines per query, topic id then text (§6).

use crate::error::{RetrievalError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub topic_id: u32,
    pub text: String,
}

/// Parses a queries file into an ordered list of `(topicId, text)` pairs.
pub fn parse_queries(contents: &str) -> Result<Vec<Query>> {
    let lines: Vec<&str> = contents.lines().map(str::trim).collect();
    // Trailing blank lines are common in hand-edited query files; ignore them.
    let lines: Vec<&str> = {
        let mut l = lines;
        while matches!(l.last(), Some(&"")) {
            l.pop();
        }
        l
    };

    if lines.len() % 2 != 0 {
        return Err(RetrievalError::MalformedQueriesFile {
            reason: format!(
                "expected an even number of non-blank lines (topicId, query pairs), found {}",
                lines.len()
            ),
        });
    }

    lines
        .chunks(2)
        .map(|pair| {
            let topic_id: u32 = pair[0].parse().map_err(|_| RetrievalError::MalformedQueriesFile {
                reason: format!("topic id line {:?} is not an integer", pair[0]),
            })?;
            Ok(Query {
                topic_id,
                text: pair[1].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_queries() {
        let contents = "401\nquick brown fox\n402\nlazy dog\n";
        let queries = parse_queries(contents).unwrap();
        assert_eq!(
            queries,
            vec![
                Query { topic_id: 401, text: "quick brown fox".to_string() },
                Query { topic_id: 402, text: "lazy dog".to_string() },
            ]
        );
    }

    #[test]
    fn trims_whitespace_on_each_line() {
        let contents = "  401  \n  quick brown fox  \n";
        let queries = parse_queries(contents).unwrap();
        assert_eq!(queries[0].text, "quick brown fox");
    }

    #[test]
    fn odd_line_count_is_malformed() {
        let contents = "401\nquick brown fox\n402\n";
        assert!(parse_queries(contents).is_err());
    }

    #[test]
    fn non_integer_topic_id_is_malformed() {
        let contents = "not-a-number\nquick brown fox\n";
        assert!(parse_queries(contents).is_err());
    }
}
