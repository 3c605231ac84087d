//! # newswire-retrieval
//!
//! A small full-text retrieval system over the TREC LA Times 1989-1990
//! newswire collection: an indexing pipeline, BM25 and Boolean-AND
//! retrieval engines, a query-biased snippet extractor, and a batch
//! effectiveness evaluator (AP, P@10, NDCG@10, NDCG@1000, Time-Biased Gain).
//!
//! The crate is a library plus five thin `[[bin]]` front ends (`indexer`,
//! `bool-and`, `bm25`, `search`, `eval`) that each parse their own CLI
//! arguments and call straight into the modules below.

pub mod config;
pub mod error;
pub mod eval;
pub mod index;
pub mod logging;
pub mod parse;
pub mod retrieval;
pub mod snippet;
pub mod text;
