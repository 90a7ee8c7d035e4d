pub mod config;
pub mod docs;
pub mod error;
pub mod qrels;
pub mod store;
pub mod topics;

pub use config::Config;
pub use error::{Result, TreckitError};
pub use qrels::parse_qrels;
pub use store::{fetch_text, DocumentStore, FsDocumentStore};
pub use topics::parse_topics;
