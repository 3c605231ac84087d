//! The date-partitioned raw document store, `<index_dir>/MM/DD/YY/<docno>.txt` (§3, §4.4).

use crate::text::date::date_path_segments;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DocStore {
    root: PathBuf,
}

impl DocStore {
    pub fn new(index_dir: &Path) -> Self {
        DocStore {
            root: index_dir.to_path_buf(),
        }
    }

    fn path_for(&self, docno: &str, date: &str) -> PathBuf {
        let (mm, dd, yy) = date_path_segments(date);
        self.root.join(mm).join(dd).join(yy).join(format!("{docno}.txt"))
    }

    /// Writes `raw` verbatim to `MM/DD/YY/<docno>.txt`, creating the date
    /// partition directory if needed.
    pub fn write(&self, docno: &str, date: &str, raw: &str) -> std::io::Result<()> {
        let path = self.path_for(docno, date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, raw)
    }

    /// Reads back a previously stored raw record, used by the interactive
    /// driver to display the full document (§4.9).
    pub fn read(&self, docno: &str, date: &str) -> std::io::Result<String> {
        fs::read_to_string(self.path_for(docno, date))
    }
}
