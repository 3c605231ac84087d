//! Deserializes the three persisted maps back into memory and derives the
//! auxiliary values retrieval and evaluation need (§3, §4.5, §9).

use crate::error::{RetrievalError, Result};
use crate::index::builder::{INVERTED_INDEX_FILE, LEXICON_FILE, METADATA_FILE};
use crate::index::lexicon::Lexicon;
use crate::index::metadata::{average_doc_length, MetadataMap};
use crate::index::postings::InvertedIndex;
use crate::index::store::DocStore;
use ahash::AHashMap;
use std::path::Path;

/// The fully loaded, immutable index, borrowed read-only by every engine.
pub struct LoadedIndex {
    pub lexicon: Lexicon,
    pub inverted: InvertedIndex,
    pub metadata: MetadataMap,
    /// Derived auxiliary map, not persisted: `docno -> internal_id`, used by
    /// the evaluator to translate qrels docnos into internal ids (§3).
    pub docno_to_id: AHashMap<String, u32>,
    pub avgdl: f64,
    pub num_docs: usize,
    pub store: DocStore,
}

impl LoadedIndex {
    pub fn load(index_dir: &Path) -> Result<Self> {
        let metadata: MetadataMap = read_json(&index_dir.join(METADATA_FILE))?;
        let lexicon: Lexicon = read_json(&index_dir.join(LEXICON_FILE))?;
        let inverted: InvertedIndex = read_json(&index_dir.join(INVERTED_INDEX_FILE))?;

        let docno_to_id = metadata
            .iter()
            .enumerate()
            .map(|(id, meta)| (meta.docno.clone(), id as u32))
            .collect();

        let avgdl = average_doc_length(&metadata);
        let num_docs = metadata.len();
        let store = DocStore::new(index_dir);

        Ok(LoadedIndex {
            lexicon,
            inverted,
            metadata,
            docno_to_id,
            avgdl,
            num_docs,
            store,
        })
    }

    pub fn doc_meta(&self, internal_id: u32) -> Option<&crate::index::metadata::DocMeta> {
        self.metadata.get(internal_id as usize)
    }

    pub fn internal_id(&self, docno: &str) -> Option<u32> {
        self.docno_to_id.get(docno).copied()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| RetrievalError::Serialization {
        path: path.display().to_string(),
        source,
    })
}
