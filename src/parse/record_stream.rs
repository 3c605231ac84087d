//! Slices a decoded byte stream into `<DOC>...</DOC>` records (§4.3).

use std::io::BufRead;

/// Reads whole `<DOC>...</DOC>` records out of `reader`, line by line.
///
/// A record is everything accumulated since the previous record ended, up to
/// and including the line containing `</DOC>`. Blank lines and anything
/// before the first `<DOC>` are folded into whichever record follows them;
/// in a well-formed corpus file that is never observed.
pub struct RecordReader<R> {
    reader: R,
    offset: u64,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        RecordReader { reader, offset: 0 }
    }

    /// Reads the next record, returning `(raw_text, start_offset)`.
    ///
    /// Returns `Ok(None)` at end of stream with no partial record pending.
    ///
    /// The corpus is read as raw bytes (`read_until`, not `read_line`): the
    /// real LA Times 1989-1990 text contains extended/Latin-1 bytes in
    /// `<TEXT>`/`<HEADLINE>` content that aren't valid UTF-8 on their own.
    /// Per §4.1 the tokenizer treats any non-ASCII-alphanumeric byte as a
    /// harmless separator, so a lossy conversion here (replacing invalid
    /// sequences with U+FFFD) preserves the byte-stream contract in §4.3
    /// without turning legitimate corpus content into a fatal parse error.
    pub fn next_record(&mut self) -> std::io::Result<Option<(String, u64)>> {
        let start_offset = self.offset;
        let mut buffer = Vec::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            let bytes_read = self.reader.read_until(b'\n', &mut line)?;
            if bytes_read == 0 {
                // End of stream.
                return if buffer.is_empty() {
                    Ok(None)
                } else {
                    self.offset += buffer.len() as u64;
                    Ok(Some((String::from_utf8_lossy(&buffer).into_owned(), start_offset)))
                };
            }

            self.offset += bytes_read as u64;
            buffer.extend_from_slice(&line);

            if line.windows(6).any(|w| w == b"</DOC>") {
                return Ok(Some((String::from_utf8_lossy(&buffer).into_owned(), start_offset)));
            }
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = std::io::Result<(String, u64)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_two_records() {
        let input = "<DOC>\n<DOCNO>A</DOCNO>\n</DOC>\n<DOC>\n<DOCNO>B</DOCNO>\n</DOC>\n";
        let mut reader = RecordReader::new(Cursor::new(input));

        let (first, _) = reader.next_record().unwrap().unwrap();
        assert!(first.contains("<DOCNO>A</DOCNO>"));
        assert!(first.trim_end().ends_with("</DOC>"));

        let (second, _) = reader.next_record().unwrap().unwrap();
        assert!(second.contains("<DOCNO>B</DOCNO>"));

        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn empty_input_yields_no_records() {
        let mut reader = RecordReader::new(Cursor::new(""));
        assert!(reader.next_record().unwrap().is_none());
    }

    #[test]
    fn iterator_impl_matches_next_record() {
        let input = "<DOC>\n<DOCNO>A</DOCNO>\n</DOC>\n";
        let reader = RecordReader::new(Cursor::new(input));
        let records: Vec<_> = reader.collect::<std::io::Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn invalid_utf8_byte_is_replaced_not_fatal() {
        // A raw 0x92 (Windows-1252 curly apostrophe) embedded in <TEXT>,
        // as seen in the real corpus, is not valid UTF-8 on its own.
        let mut input = Vec::new();
        input.extend_from_slice(b"<DOC>\n<DOCNO>LA010189-0001</DOCNO>\n<TEXT>it\x92s fine</TEXT>\n</DOC>\n");
        let mut reader = RecordReader::new(Cursor::new(input));

        let (record, _) = reader.next_record().unwrap().unwrap();
        assert!(record.contains("<DOCNO>LA010189-0001</DOCNO>"));
        // The invalid byte is replaced with U+FFFD rather than aborting the read.
        assert!(record.contains('\u{FFFD}'));
    }
}
