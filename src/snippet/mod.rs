//! Query-biased sentence-ranking snippet extractor (§4.7).

use crate::text::tokenize_and_stem;
use ahash::AHashSet;

struct ScoredSentence<'a> {
    original: &'a str,
    score: u32,
}

/// Splits `text` on `.`, `!`, `?`, trims each piece, and discards sentences
/// with fewer than 5 whitespace-split words.
fn segment_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| s.split_whitespace().count() >= 5)
        .collect()
}

/// Longest contiguous run of tokens that are all members of `query_terms`.
fn longest_matching_run(tokens: &[String], query_terms: &AHashSet<String>) -> u32 {
    let mut best = 0u32;
    let mut current = 0u32;
    for token in tokens {
        if query_terms.contains(token) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }
    best
}

fn score_sentence(rank_among_kept: usize, tokens: &[String], query_terms: &AHashSet<String>) -> u32 {
    let l = match rank_among_kept {
        0 => 2,
        1 => 1,
        _ => 0,
    };
    let c = tokens.iter().filter(|t| query_terms.contains(*t)).count() as u32;
    let d = tokens
        .iter()
        .collect::<AHashSet<_>>()
        .into_iter()
        .filter(|t| query_terms.contains(*t))
        .count() as u32;
    let k = longest_matching_run(tokens, query_terms);

    l + c + d + k
}

/// Extracts a snippet of at most two sentences, biased toward the stemmed
/// `query_terms` (§4.7). `query_terms` should already be deduplicated and
/// stemmed via [`crate::text::tokenize_and_stem`].
pub fn extract_snippet(text: &str, query_terms: &AHashSet<String>) -> String {
    let kept = segment_sentences(text);

    let mut scored: Vec<ScoredSentence> = kept
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let tokens = tokenize_and_stem(sentence);
            ScoredSentence {
                original: sentence,
                score: score_sentence(i, &tokens, query_terms),
            }
        })
        .collect();

    // Stable sort: ties preserve original document order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored
        .into_iter()
        .take(2)
        .map(|s| s.original)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates `s` to `max_len` characters, appending `"..."` when truncated (§4.7).
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_len).collect();
    format!("{truncated}...")
}

/// Renders the two SERP lines for rank `r` (§4.7): the headline-or-fallback
/// line, then the `<snippet> (<docno>)` line.
///
/// `date` is the flat `MMDDYY` form (as stored in `DocMeta`); it's
/// slash-joined into `MM/DD/YY` for display here, matching §4.7's literal
/// format.
pub fn format_serp_lines(
    rank: usize,
    headline: &str,
    snippet: &str,
    date: &str,
    docno: &str,
) -> (String, String) {
    let headline_or_fallback = if headline.is_empty() {
        truncate_with_ellipsis(snippet, 50)
    } else {
        headline.to_string()
    };

    let (mm, dd, yy) = crate::text::date::date_path_segments(date);
    let first = format!("{rank}. {headline_or_fallback} ({mm}/{dd}/{yy})");
    let second = format!("{snippet} ({docno})");
    (first, second)
}
