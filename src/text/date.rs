//! Date extraction from a `docno` (§3: `date = docno[2..8]`).

/// Extracts the `MMDDYY` substring at byte offsets `2..8` of a 13-character
/// docno, e.g. `"LA010189-0001"` -> `"010189"`.
pub fn date_from_docno(docno: &str) -> &str {
    &docno[2..8]
}

/// Splits an `MMDDYY` date string into its `(MM, DD, YY)` components for
/// use as directory path segments.
pub fn date_path_segments(date: &str) -> (&str, &str, &str) {
    (&date[0..2], &date[2..4], &date[4..6])
}
