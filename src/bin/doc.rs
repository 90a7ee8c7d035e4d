//! Document CLI: extract one document's flattened body text.

use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use treckit::docs::{self, trecweb};
use treckit::{fetch_text, DocumentStore, FsDocumentStore};

/// Extract a document's text from a folder of per-identifier files or a
/// trecweb collection file.
#[derive(Parser, Debug)]
#[command(name = "doc")]
struct Args {
    /// Document identifier (also the file name inside the docs folder).
    docid: String,

    /// Folder holding one file per document identifier.
    #[arg(long, default_value = "docs")]
    docs_dir: PathBuf,

    /// Treat the stored file as a JSON envelope with a text field.
    #[arg(long, conflicts_with = "tagged")]
    json_record: bool,

    /// Treat the stored file as a TREC-tagged record.
    #[arg(long)]
    tagged: bool,

    /// Read from a trecweb collection file, printing the record whose
    /// DOCNO matches the identifier.
    #[arg(long, value_name = "FILE", conflicts_with_all = ["json_record", "tagged"])]
    trecweb: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let text = if let Some(path) = &args.trecweb {
        let file = File::open(path)?;
        let records = trecweb::read_records(BufReader::new(file))?;
        records
            .into_iter()
            .find(|r| r.docno == args.docid)
            .map(|r| r.content)
            .ok_or_else(|| {
                anyhow::anyhow!("no record with DOCNO {} in {}", args.docid, path.display())
            })?
    } else if args.json_record {
        let store = FsDocumentStore::new(&args.docs_dir);
        fetch_text(&store, &args.docid)?
    } else if args.tagged {
        let store = FsDocumentStore::new(&args.docs_dir);
        let raw = store.fetch_raw(&args.docid)?;
        docs::extract_tagged_text(&raw)
    } else {
        docs::load_doc_text(&args.docs_dir, &args.docid)?
    };

    println!("{}", text);

    Ok(())
}
