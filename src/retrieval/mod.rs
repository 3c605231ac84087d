//! Retrieval engines: Boolean-AND and BM25, plus the shared result-line and
//! queries-file formats (§4.5, §4.6, §6).

pub mod bm25;
pub mod boolean;
pub mod queries_file;
pub mod result_line;
