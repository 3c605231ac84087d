//! Index builder: owned, in-memory state consumed into three serialized
//! files at the end of one indexing pass (§4.4, §9).
//!
//! No process-wide mutable state: the lexicon, inverted index and metadata
//! live inside one `IndexBuilder` value created at phase start and consumed
//! by `finish`.

use crate::error::{RetrievalError, Result};
use crate::index::lexicon::Lexicon;
use crate::index::metadata::{DocMeta, MetadataMap};
use crate::index::postings::{InvertedIndex, Posting};
use crate::index::store::DocStore;
use crate::parse::document::ParsedRecord;
use crate::text::{date::date_from_docno, tokenize_and_stem};
use ahash::AHashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = "metadata.txt";
pub const LEXICON_FILE: &str = "lexicon.txt";
pub const INVERTED_INDEX_FILE: &str = "invertedIndex.txt";

pub struct IndexBuilder {
    index_dir: PathBuf,
    store: DocStore,
    lexicon: Lexicon,
    inverted: InvertedIndex,
    metadata: MetadataMap,
}

impl IndexBuilder {
    /// Creates a fresh index directory. Fails if `index_dir` already exists (§6).
    pub fn create(index_dir: &Path) -> Result<Self> {
        if index_dir.exists() {
            return Err(RetrievalError::OutputAlreadyExists {
                path: index_dir.display().to_string(),
            });
        }
        fs::create_dir_all(index_dir)?;

        Ok(IndexBuilder {
            index_dir: index_dir.to_path_buf(),
            store: DocStore::new(index_dir),
            lexicon: Lexicon::new(),
            inverted: InvertedIndex::default(),
            metadata: Vec::new(),
        })
    }

    /// Indexes one parsed record, assigning it the next dense `internal_id` (§4.4).
    pub fn add_record(&mut self, record: &ParsedRecord) -> Result<()> {
        let internal_id = self.metadata.len() as u32;

        let raw_text = record.indexable_text();
        let tokens = tokenize_and_stem(&raw_text);
        let length = tokens.len() as u32;

        let mut term_frequencies: AHashMap<u32, u32> = AHashMap::default();
        for token in &tokens {
            let token_id = self.lexicon.insert_or_get(token);
            *term_frequencies.entry(token_id).or_insert(0) += 1;
        }

        // Documents are processed in ascending internal_id order, so
        // appending here preserves the ascending-docid postings invariant
        // without a sort.
        for (token_id, count) in term_frequencies {
            self.inverted.entry(token_id).or_default().push(Posting {
                doc_id: internal_id,
                count,
            });
        }

        let date = date_from_docno(&record.docno).to_string();
        self.store.write(&record.docno, &date, &record.raw)?;

        self.metadata.push(DocMeta {
            docno: record.docno.clone(),
            headline: record.headline.clone(),
            date,
            length,
        });

        Ok(())
    }

    pub fn num_docs(&self) -> usize {
        self.metadata.len()
    }

    /// Serializes the three maps to `<index_dir>/{metadata,lexicon,invertedIndex}.txt`.
    pub fn finish(self) -> Result<()> {
        write_json(&self.index_dir.join(METADATA_FILE), &self.metadata)?;
        write_json(&self.index_dir.join(LEXICON_FILE), &self.lexicon)?;
        write_json(&self.index_dir.join(INVERTED_INDEX_FILE), &self.inverted)?;
        Ok(())
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer(writer, value).map_err(|source| RetrievalError::Serialization {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::document::parse_record;
    use tempfile::tempdir;

    fn doc(docno: &str, text: &str) -> ParsedRecord {
        let raw = format!("<DOC><DOCNO>{docno}</DOCNO><TEXT>{text}</TEXT></DOC>");
        parse_record(&raw, 0).unwrap()
    }

    #[test]
    fn refuses_to_overwrite_existing_dir() {
        let dir = tempdir().unwrap();
        let index_dir = dir.path().join("idx");
        fs::create_dir_all(&index_dir).unwrap();
        assert!(IndexBuilder::create(&index_dir).is_err());
    }

    #[test]
    fn assigns_dense_internal_ids() {
        let dir = tempdir().unwrap();
        let mut builder = IndexBuilder::create(&dir.path().join("idx")).unwrap();
        builder.add_record(&doc("LA010189-0001", "the quick fox")).unwrap();
        builder.add_record(&doc("LA010189-0002", "the lazy dog")).unwrap();
        assert_eq!(builder.num_docs(), 2);
    }

    #[test]
    fn identical_docs_get_distinct_ids_and_duplicated_postings() {
        let dir = tempdir().unwrap();
        let mut builder = IndexBuilder::create(&dir.path().join("idx")).unwrap();
        let record = doc("LA010189-0001", "fox fox fox");
        builder.add_record(&record).unwrap();
        let mut record2 = doc("LA010189-0002", "fox fox fox");
        record2.docno = "LA010189-0002".to_string();
        builder.add_record(&record2).unwrap();

        let fox_id = builder.lexicon.get("fox").unwrap();
        let postings = builder.inverted.get(&fox_id).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].doc_id, 0);
        assert_eq!(postings[1].doc_id, 1);
        assert_eq!(postings[0].count, 3);
        // Lexicon size does not grow on the second, identical document.
        assert_eq!(builder.lexicon.len(), 1);
    }

    #[test]
    fn writes_raw_record_under_date_partition() {
        let dir = tempdir().unwrap();
        let index_dir = dir.path().join("idx");
        let mut builder = IndexBuilder::create(&index_dir).unwrap();
        builder.add_record(&doc("LA010189-0001", "hello")).unwrap();
        builder.finish().unwrap();

        assert!(index_dir.join("01/01/89/LA010189-0001.txt").exists());
        assert!(index_dir.join(METADATA_FILE).exists());
        assert!(index_dir.join(LEXICON_FILE).exists());
        assert!(index_dir.join(INVERTED_INDEX_FILE).exists());
    }
}
