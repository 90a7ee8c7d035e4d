//! Trecweb collection reader: `<DOC>`-delimited records with a `<DOCNO>`
//! identifier and content following the `<DOCHDR>` block.

use crate::error::{Result, TreckitError};
use std::io::BufRead;

const DOC_OPEN: &str = "<DOC>";
const DOC_CLOSE: &str = "</DOC>";
const DOCNO_OPEN: &str = "<DOCNO>";
const DOCNO_CLOSE: &str = "</DOCNO>";
const DOCHDR_OPEN: &str = "<DOCHDR>";
const DOCHDR_CLOSE: &str = "</DOCHDR>";

/// One record from a trecweb collection file.
#[derive(Debug, Clone, PartialEq)]
pub struct TrecwebRecord {
    pub docno: String,
    pub content: String,
}

/// Read every `<DOC>`-delimited record from `reader`.
///
/// Lines outside `<DOC>`/`</DOC>` pairs are ignored; each complete block is
/// handed to [`parse_record`].
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<TrecwebRecord>> {
    let mut records = Vec::new();
    let mut block = String::new();
    let mut in_record = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.starts_with(DOC_OPEN) {
            in_record = true;
            continue;
        }
        if line.starts_with(DOC_CLOSE) && !block.is_empty() {
            records.push(parse_record(&block)?);
            block.clear();
            in_record = false;
            continue;
        }
        if in_record {
            block.push_str(line);
            block.push('\n');
        }
    }

    Ok(records)
}

/// Parse the inside of one `<DOC>` block.
///
/// The block must start with `<DOCNO>id</DOCNO>`; the record content is
/// everything after the `</DOCHDR>` header terminator, trimmed.
pub fn parse_record(block: &str) -> Result<TrecwebRecord> {
    let start = block
        .find(DOCNO_OPEN)
        .ok_or_else(|| missing_tag(DOCNO_OPEN))?;
    if start != 0 {
        return Err(TreckitError::Parse(format!(
            "record should start with {DOCNO_OPEN}"
        )));
    }
    let end = block
        .find(DOCNO_CLOSE)
        .ok_or_else(|| missing_tag(DOCNO_CLOSE))?;
    let docno = block[DOCNO_OPEN.len()..end].trim().to_string();

    let hdr_open = block
        .find(DOCHDR_OPEN)
        .ok_or_else(|| missing_tag(DOCHDR_OPEN))?;
    let hdr_close = block
        .find(DOCHDR_CLOSE)
        .ok_or_else(|| missing_tag(DOCHDR_CLOSE))?;
    if hdr_close < hdr_open {
        return Err(TreckitError::Parse(format!(
            "{DOCHDR_CLOSE} comes before {DOCHDR_OPEN}"
        )));
    }
    let content = block[hdr_close + DOCHDR_CLOSE.len()..].trim().to_string();

    Ok(TrecwebRecord { docno, content })
}

fn missing_tag(tag: &str) -> TreckitError {
    TreckitError::Parse(format!("cannot find tag {tag}"))
}
