//! Corpus summary: parse the configured topics and qrels, report coverage.

use std::collections::HashSet;
use treckit::{parse_qrels, parse_topics, Config};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let topics = parse_topics(config.topics_path())?;
    let qrels = parse_qrels(config.qrels_path())?;

    let judged_docs: HashSet<&str> = qrels
        .values()
        .flat_map(|docids| docids.iter().map(String::as_str))
        .collect();
    let total_judgments: usize = qrels.values().map(HashSet::len).sum();
    let topics_without_judgments = topics
        .keys()
        .filter(|qid| !qrels.contains_key(qid))
        .count();
    let judged_without_topic = qrels
        .keys()
        .filter(|qid| !topics.contains_key(qid))
        .count();

    println!("\n=== Treckit Corpus Statistics ===\n");
    println!("{:-<50}", "");
    println!("{:<36} {:>12}", "Metric", "Count");
    println!("{:-<50}", "");
    println!("{:<36} {:>12}", "Topics", topics.len());
    println!("{:<36} {:>12}", "Judged queries", qrels.len());
    println!("{:<36} {:>12}", "Relevance judgments", total_judgments);
    println!("{:<36} {:>12}", "Distinct judged documents", judged_docs.len());
    println!(
        "{:<36} {:>12}",
        "Topics without judgments", topics_without_judgments
    );
    println!(
        "{:<36} {:>12}",
        "Judged queries without a topic", judged_without_topic
    );
    println!("{:-<50}", "");
    println!();

    Ok(())
}
