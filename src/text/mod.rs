//! Text primitives: tokenizer, Porter stemmer wrapper, date extractor (§4.1-4.2).

pub mod date;
pub mod stemmer;
pub mod tokenizer;

/// Tokenizes then stems `text`, the pipeline every component (indexer,
/// query engines, snippet scorer) funnels raw text through.
pub fn tokenize_and_stem(text: &str) -> Vec<String> {
    stemmer::stem_all(&tokenizer::tokenize(text))
}
