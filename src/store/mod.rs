//! Document store access: an opaque fetch-by-identifier seam plus the JSON
//! envelope used by stored records.

use crate::error::{Result, TreckitError};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::PathBuf;

/// A store of raw document records keyed by identifier.
///
/// Implementations only promise the single fetch operation; how records are
/// stored and found is their business. Extraction logic takes this trait so
/// it can be tested against an in-memory stub.
pub trait DocumentStore {
    /// Fetch the raw stored form of a document by identifier.
    fn fetch_raw(&self, docid: &str) -> Result<String>;
}

/// Fetch a document through the store and unwrap its JSON envelope,
/// returning the `text` field verbatim.
///
/// Stores holding TREC-tagged records instead of JSON envelopes go through
/// [`crate::docs::extract_tagged_text`] on the raw record.
pub fn fetch_text<S: DocumentStore + ?Sized>(store: &S, docid: &str) -> Result<String> {
    let raw = store.fetch_raw(docid)?;
    let record: JsonValue = serde_json::from_str(&raw)?;
    record
        .get("text")
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| TreckitError::Parse(format!("record for {docid} has no text field")))
}

/// Directory-backed store: each document identifier names a file under the
/// root directory whose contents are the raw record.
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentStore for FsDocumentStore {
    fn fetch_raw(&self, docid: &str) -> Result<String> {
        let path = self.root.join(docid);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                TreckitError::DocumentNotFound(format!("{} in {}", docid, self.root.display()))
            }
            _ => TreckitError::Io(e),
        })
    }
}
