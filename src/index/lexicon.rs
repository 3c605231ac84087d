//! The lexicon: `string -> token_id`, ids assigned densely in first-seen order (§3).

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Lexicon {
    terms: AHashMap<String, u32>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `term`, assigning it the next dense id if unseen.
    pub fn insert_or_get(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.terms.get(term) {
            return id;
        }
        let id = self.terms.len() as u32;
        self.terms.insert(term.to_string(), id);
        id
    }

    /// Looks up `term` without inserting it — used by query-time engines,
    /// which must silently drop out-of-vocabulary terms (§4.5, §4.6).
    pub fn get(&self, term: &str) -> Option<u32> {
        self.terms.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_dense_ids_in_first_seen_order() {
        let mut lex = Lexicon::new();
        assert_eq!(lex.insert_or_get("fox"), 0);
        assert_eq!(lex.insert_or_get("dog"), 1);
        assert_eq!(lex.insert_or_get("fox"), 0);
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn unseen_term_lookup_returns_none() {
        let lex = Lexicon::new();
        assert_eq!(lex.get("missing"), None);
    }

    #[test]
    fn round_trips_through_json() {
        let mut lex = Lexicon::new();
        lex.insert_or_get("fox");
        lex.insert_or_get("dog");

        let json = serde_json::to_string(&lex).unwrap();
        let restored: Lexicon = serde_json::from_str(&json).unwrap();
        assert_eq!(lex, restored);
    }
}
