//! Document text extraction from per-identifier files and TREC-tagged
//! records.

pub mod trecweb;

use crate::error::{Result, TreckitError};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Inline body marker used by per-identifier document files. One separator
/// character sits between the marker and the payload.
const TEXT_MARKER: &str = "[Text]";
const TEXT_MARKER_OFFSET: usize = TEXT_MARKER.len() + 1;

const TEXT_OPEN_TAG: &str = "<TEXT>";
const TEXT_CLOSE_TAG: &str = "</TEXT>";
const PARA_OPEN_TAG: &str = "<P>";
const PARA_CLOSE_TAG: &str = "</P>";

/// Read the document file `<folder>/<docid>` and return its flattened body
/// text: all body lines joined with single spaces, trimmed.
///
/// The body starts at the line containing `[Text]` (the remainder of that
/// line is part of the body) and ends at a line that is exactly `</TEXT>`;
/// anything after the terminator is ignored.
pub fn load_doc_text<P: AsRef<Path>>(folder: P, docid: &str) -> Result<String> {
    let path = folder.as_ref().join(docid);
    let file = File::open(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TreckitError::DocumentNotFound(format!(
            "{} in {}",
            docid,
            folder.as_ref().display()
        )),
        _ => TreckitError::Io(e),
    })?;
    let reader = BufReader::new(file);

    let mut within_body = false;
    let mut doc = String::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line == TEXT_CLOSE_TAG {
            break;
        }
        if within_body {
            if !line.is_empty() {
                doc.push_str(line);
                doc.push(' ');
            }
        } else if line.contains(TEXT_MARKER) {
            within_body = true;
            doc.push_str(line.get(TEXT_MARKER_OFFSET..).unwrap_or(""));
            doc.push(' ');
        }
    }

    debug!("extracted {} bytes of text for {}", doc.trim().len(), docid);
    Ok(doc.trim().to_string())
}

/// Extract the flattened body text from a TREC-tagged record held in
/// memory.
///
/// Accumulation starts after a line containing `<TEXT>` and stops at a line
/// containing `</TEXT>`; paragraph tag lines (`<P>`, `</P>`) are skipped.
/// A record without a `<TEXT>` section yields the empty string.
pub fn extract_tagged_text(content: &str) -> String {
    let mut within_body = false;
    let mut doc = String::new();
    for line in content.split('\n') {
        let line = line.trim();
        if line.contains(TEXT_OPEN_TAG) {
            within_body = true;
        } else if line.contains(TEXT_CLOSE_TAG) {
            break;
        } else if within_body {
            if line == PARA_OPEN_TAG || line == PARA_CLOSE_TAG {
                continue;
            }
            if !line.is_empty() {
                doc.push_str(line);
                doc.push(' ');
            }
        }
    }
    doc.trim().to_string()
}
