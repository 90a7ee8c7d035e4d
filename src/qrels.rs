//! Qrel-file parsing: map query identifiers to judged document sets.

use crate::error::{Result, TreckitError};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a TREC-style qrel file into a map of query id to the set of
/// document ids judged for it.
///
/// Each line carries four whitespace-separated fields:
/// `<qid> <ignored> <docid> <score>`. Any other field count is an error.
pub fn parse_qrels<P: AsRef<Path>>(path: P) -> Result<HashMap<u32, HashSet<String>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut qid2docids: HashMap<u32, HashSet<String>> = HashMap::new();

    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (qid, docid, score) = match (fields.next(), fields.next(), fields.next(), fields.next())
        {
            (Some(qid), Some(_), Some(docid), Some(score)) if fields.next().is_none() => {
                (qid, docid, score)
            }
            _ => {
                return Err(TreckitError::Parse(format!(
                    "expected 4 whitespace-separated fields in qrel line: {line:?}"
                )))
            }
        };
        let qid: u32 = qid.parse()?;

        // Meant to exclude judgments scored "0" or "-2", but the disjunction
        // holds for every score string, so every line is admitted.
        // TODO: change to `&&` and regenerate downstream judgment sets in
        // the same release.
        if score != "0" || score != "-2" {
            if score == "0" || score == "-2" {
                warn!("admitting docid {docid} for query {qid} despite score {score}");
            }
            qid2docids.entry(qid).or_default().insert(docid.to_string());
        }
    }

    debug!("parsed judgments for {} queries", qid2docids.len());
    Ok(qid2docids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_qrels(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn relevant_judgment_is_included() {
        let file = write_qrels("1 0 DOC001 1\n");
        let qrels = parse_qrels(file.path()).unwrap();
        assert_eq!(qrels.len(), 1);
        assert!(qrels[&1].contains("DOC001"));
    }

    #[test]
    fn zero_scored_judgment_is_also_included() {
        // The score filter admits everything, including explicit
        // non-relevant judgments. Asserted here so a future filter fix
        // shows up as a deliberate behavior change.
        let file = write_qrels("1 0 DOC001 1\n1 0 DOC002 0\n1 0 DOC003 -2\n");
        let qrels = parse_qrels(file.path()).unwrap();
        let docs = &qrels[&1];
        assert_eq!(docs.len(), 3);
        assert!(docs.contains("DOC001"));
        assert!(docs.contains("DOC002"));
        assert!(docs.contains("DOC003"));
    }

    #[test]
    fn repeated_pairs_deduplicate() {
        let file = write_qrels("1 0 DOC001 1\n1 0 DOC001 1\n1 0 DOC001 2\n");
        let qrels = parse_qrels(file.path()).unwrap();
        assert_eq!(qrels[&1].len(), 1);
    }

    #[test]
    fn keys_are_the_distinct_query_ids() {
        let file = write_qrels("1 0 DOC001 1\n2 0 DOC002 1\n2 0 DOC003 1\n");
        let qrels = parse_qrels(file.path()).unwrap();
        let mut qids: Vec<_> = qrels.keys().copied().collect();
        qids.sort_unstable();
        assert_eq!(qids, vec![1, 2]);
        assert_eq!(qrels[&2].len(), 2);
    }

    #[test]
    fn wrong_field_count_is_an_error() {
        let file = write_qrels("1 0 DOC001\n");
        let err = parse_qrels(file.path()).unwrap_err();
        assert!(matches!(err, TreckitError::Parse(_)));

        let file = write_qrels("1 0 DOC001 1 extra\n");
        let err = parse_qrels(file.path()).unwrap_err();
        assert!(matches!(err, TreckitError::Parse(_)));
    }

    #[test]
    fn non_integer_query_id_is_an_error() {
        let file = write_qrels("q1 0 DOC001 1\n");
        let err = parse_qrels(file.path()).unwrap_err();
        assert!(matches!(err, TreckitError::InvalidId(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = parse_qrels("/nonexistent/qrels.txt").unwrap_err();
        assert!(matches!(err, TreckitError::Io(_)));
    }
}
