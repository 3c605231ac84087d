//! Porter stemmer wrapper (§4.2).
//!
//! Treated as a pure function `stem: string -> string`, backed by the
//! `rust-stemmers` crate's English (Porter) algorithm. The stemmer itself
//! holds no per-call state, so a single process-wide instance is safe to
//! share.

use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};

static STEMMER: Lazy<Stemmer> = Lazy::new(|| Stemmer::create(Algorithm::English));

/// Stems a single already-lowercased token.
pub fn stem(token: &str) -> String {
    STEMMER.stem(token).into_owned()
}

/// Stems every token in `tokens`, in order.
pub fn stem_all(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| stem(t)).collect()
}
