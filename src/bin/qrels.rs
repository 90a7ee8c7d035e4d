//! Qrel CLI: parse a relevance-judgment file and report judged documents.

use clap::Parser;
use std::path::PathBuf;
use treckit::parse_qrels;

/// Parse a TREC-style qrel file and print judged-document counts per query.
#[derive(Parser, Debug)]
#[command(name = "qrels")]
struct Args {
    /// Path to the qrel file.
    qrels: PathBuf,

    /// Emit a JSON object of qid -> sorted docid list instead of counts.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let qrels = parse_qrels(&args.qrels)?;

    let mut qids: Vec<u32> = qrels.keys().copied().collect();
    qids.sort_unstable();

    if args.json {
        let mut map = serde_json::Map::new();
        for qid in &qids {
            let mut docids: Vec<&str> = qrels[qid].iter().map(String::as_str).collect();
            docids.sort_unstable();
            map.insert(qid.to_string(), docids.into());
        }
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        let mut total = 0;
        for qid in &qids {
            println!("{}\t{} documents", qid, qrels[qid].len());
            total += qrels[qid].len();
        }
        println!("total\t{} judgments over {} queries", total, qids.len());
    }

    Ok(())
}
