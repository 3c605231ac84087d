//! Field extraction from a single `<DOC>...</DOC>` record (§4.3).

use crate::error::{RetrievalError, Result};
use crate::parse::tag_scanner::{find_all_tags, find_tag};

/// The four text regions pulled out of one raw record, plus the raw bytes
/// so the index builder can write them verbatim to the doc store.
#[derive(Debug, Clone)]
pub struct ParsedRecord {
    pub docno: String,
    pub headline: String,
    pub text: String,
    pub graphic: String,
    pub raw: String,
}

/// Parses one `<DOC>...</DOC>` record.
///
/// `offset` is the byte offset of the record within the larger stream, used
/// only to produce an actionable error message.
pub fn parse_record(raw: &str, offset: u64) -> Result<ParsedRecord> {
    let docno = find_tag(raw, "DOCNO")
        .map(|s| s.trim().to_string())
        .ok_or_else(|| RetrievalError::MalformedRecord {
            offset,
            reason: "missing <DOCNO> element".to_string(),
        })?;

    if docno.len() != 13 {
        return Err(RetrievalError::MalformedRecord {
            offset,
            reason: format!("DOCNO {docno:?} has length {} (expected 13)", docno.len()),
        });
    }

    let headline = find_tag(raw, "HEADLINE")
        .map(|region| find_all_tags(region, "P").concat())
        .unwrap_or_default();

    let text = find_tag(raw, "TEXT").unwrap_or_default().to_string();
    let graphic = find_tag(raw, "GRAPHIC").unwrap_or_default().to_string();

    Ok(ParsedRecord {
        docno,
        headline,
        text,
        graphic,
        raw: raw.to_string(),
    })
}

impl ParsedRecord {
    /// `TEXT ++ HEADLINE ++ GRAPHIC`, the text the tokenizer runs over (§4.4 step 2).
    pub fn indexable_text(&self) -> String {
        let mut combined =
            String::with_capacity(self.text.len() + self.headline.len() + self.graphic.len());
        combined.push_str(&self.text);
        combined.push_str(&self.headline);
        combined.push_str(&self.graphic);
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<DOC>
<DOCNO>LA010189-0001</DOCNO>
<HEADLINE>
<P>Quick Fox Jumps</P>
</HEADLINE>
<TEXT>
The quick brown fox jumps over the lazy dog.
</TEXT>
<GRAPHIC>
A photo of a fox.
</GRAPHIC>
</DOC>"#;

    #[test]
    fn parses_all_fields() {
        let doc = parse_record(SAMPLE, 0).unwrap();
        assert_eq!(doc.docno, "LA010189-0001");
        assert_eq!(doc.headline, "Quick Fox Jumps");
        assert!(doc.text.contains("quick brown fox"));
        assert!(doc.graphic.contains("A photo of a fox."));
    }

    #[test]
    fn missing_docno_is_malformed() {
        let raw = "<DOC><TEXT>no docno here</TEXT></DOC>";
        let err = parse_record(raw, 42).unwrap_err();
        match err {
            RetrievalError::MalformedRecord { offset, .. } => assert_eq!(offset, 42),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn wrong_length_docno_is_malformed() {
        let raw = "<DOC><DOCNO>TOO-SHORT</DOCNO></DOC>";
        assert!(parse_record(raw, 0).is_err());
    }

    #[test]
    fn missing_optional_fields_are_empty() {
        let raw = "<DOC><DOCNO>LA010189-0001</DOCNO></DOC>";
        let doc = parse_record(raw, 0).unwrap();
        assert_eq!(doc.headline, "");
        assert_eq!(doc.text, "");
        assert_eq!(doc.graphic, "");
    }

    #[test]
    fn indexable_text_concatenates_in_order() {
        let doc = parse_record(SAMPLE, 0).unwrap();
        let combined = doc.indexable_text();
        let text_pos = combined.find("quick brown fox").unwrap();
        let headline_pos = combined.find("Quick Fox Jumps").unwrap();
        let graphic_pos = combined.find("A photo of a fox.").unwrap();
        assert!(text_pos < headline_pos);
        assert!(headline_pos < graphic_pos);
    }
}
