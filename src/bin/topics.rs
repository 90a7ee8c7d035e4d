//! Topic CLI: parse a topic file and print query ids with their titles.

use clap::Parser;
use std::path::PathBuf;
use treckit::parse_topics;

/// Parse a TREC-style topic file and print qid/title pairs.
#[derive(Parser, Debug)]
#[command(name = "topics")]
struct Args {
    /// Path to the topic file.
    topics: PathBuf,

    /// Emit a JSON object of qid -> title instead of tab-separated lines.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let topics = parse_topics(&args.topics)?;

    let mut qids: Vec<u32> = topics.keys().copied().collect();
    qids.sort_unstable();

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = qids
            .iter()
            .map(|qid| (qid.to_string(), topics[qid].clone().into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for qid in qids {
            println!("{}\t{}", qid, topics[&qid]);
        }
    }

    Ok(())
}
