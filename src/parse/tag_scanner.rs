//! Hand-written tag scanner (§4.3, §9).
//!
//! Extracts the text content of a handful of known SGML-ish tags without
//! pulling in a DOM library. It is not a general parser: it looks for the
//! first occurrence of an opening tag (attributes tolerated) and the next
//! matching closing tag, and returns everything between them verbatim.
//!
//! Matching the observed source behavior (§9 "Open questions"): extracted
//! text content is **not** stripped of nested tags. If a `<TEXT>` region
//! happens to contain other markup, that markup passes through into the
//! returned slice unchanged.

/// Finds the first `<tag ...>...</tag>` region and returns its inner slice.
///
/// Returns `None` if the opening or the matching closing tag is absent.
pub fn find_tag<'a>(haystack: &'a str, tag: &str) -> Option<&'a str> {
    let open_needle = format!("<{tag}");
    let open_start = haystack.find(open_needle.as_str())?;
    let after_open = &haystack[open_start + open_needle.len()..];
    let open_end_offset = after_open.find('>')?;
    let content_start = open_start + open_needle.len() + open_end_offset + 1;

    let close_needle = format!("</{tag}>");
    let close_start_rel = haystack[content_start..].find(close_needle.as_str())?;
    let content_end = content_start + close_start_rel;

    Some(&haystack[content_start..content_end])
}

/// Finds every top-level `<tag ...>...</tag>` region within `haystack` and
/// returns their inner slices in document order.
///
/// Used for `<P>` children of `<HEADLINE>`; the scan treats occurrences
/// non-recursively (a new search starts right after each closing tag), which
/// is sufficient because `<P>` elements in this corpus never nest.
pub fn find_all_tags<'a>(haystack: &'a str, tag: &str) -> Vec<&'a str> {
    let mut results = Vec::new();
    let mut cursor = 0usize;

    while cursor < haystack.len() {
        match find_tag(&haystack[cursor..], tag) {
            Some(content) => {
                results.push(content);
                // Advance past this match's closing tag so the next search
                // starts fresh; computed via the content's end offset.
                let content_start_abs =
                    content.as_ptr() as usize - haystack.as_ptr() as usize;
                let content_end_abs = content_start_abs + content.len();
                let close_needle = format!("</{tag}>");
                cursor = content_end_abs + close_needle.len();
            }
            None => break,
        }
    }

    results
}
