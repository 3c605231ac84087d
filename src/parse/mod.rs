//! Document parser: byte-stream slicing + field extraction (§4.3).

pub mod document;
pub mod record_stream;
pub mod tag_scanner;

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens a gzipped corpus file and wraps it in a buffered, line-oriented reader.
pub fn open_gz(path: &Path) -> std::io::Result<BufReader<GzDecoder<File>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(GzDecoder::new(file)))
}
