//! Topic-file parsing: map numeric query identifiers to query titles.

use crate::error::{Result, TreckitError};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Literal markers scanned for in topic files. Each payload offset is
/// derived from its marker's length so a marker change updates both.
const NUMBER_MARKER: &str = "Number: ";
const NUMBER_OFFSET: usize = NUMBER_MARKER.len();
const TITLE_TAG: &str = "<title>";
/// One separator character sits between the tag and the payload.
const TITLE_OFFSET: usize = TITLE_TAG.len() + 1;
const TITLE_CLOSE_TAG: &str = "</title>";

/// Where the scanner stands with respect to the next title value.
#[derive(Debug, PartialEq)]
enum TitleState {
    /// Scanning for the next `<title>` tag.
    AwaitingTag,
    /// The last `<title>` tag carried no text; the next line holds the
    /// title verbatim.
    AwaitingDeferredValue,
}

/// Parse a TREC-style topic file into a map of query id to title text.
///
/// A `Number: <int>` marker sets the current query identifier; a `<title>`
/// tag supplies its title, either on the same line or, when the tag line is
/// empty after the tag, on the following line. Later titles for the same
/// identifier overwrite earlier ones.
pub fn parse_topics<P: AsRef<Path>>(path: P) -> Result<HashMap<u32, String>> {
    let content = fs::read_to_string(path)?;
    let mut topics = HashMap::new();
    let mut state = TitleState::AwaitingTag;
    let mut current_qid: Option<u32> = None;

    // Lines keep their trailing newline: the identifier extraction below is
    // a positional slice that drops the line's final character, whatever it
    // is. The same line still gets the marker scans afterwards.
    for line in content.split_inclusive('\n') {
        if state == TitleState::AwaitingDeferredValue {
            let qid = require_qid(current_qid)?;
            topics.insert(qid, line.trim().to_string());
            state = TitleState::AwaitingTag;
        }

        if let Some(pos) = line.find(NUMBER_MARKER) {
            let raw = drop_last_char(line.get(pos + NUMBER_OFFSET..).unwrap_or(""));
            current_qid = Some(raw.trim().parse()?);
        }

        if let Some(pos) = line.find(TITLE_TAG) {
            let payload = line.get(pos + TITLE_OFFSET..).unwrap_or("");
            // A same-line closing tag ends the title; dialects that put the
            // closing tag on a later line fall through untouched.
            let payload = match payload.find(TITLE_CLOSE_TAG) {
                Some(end) => &payload[..end],
                None => payload,
            };
            let title = payload.trim();
            if title.is_empty() {
                state = TitleState::AwaitingDeferredValue;
            } else {
                let qid = require_qid(current_qid)?;
                topics.insert(qid, title.to_string());
            }
        }
    }

    debug!("parsed {} topics", topics.len());
    Ok(topics)
}

fn require_qid(current_qid: Option<u32>) -> Result<u32> {
    current_qid.ok_or_else(|| {
        TreckitError::Parse(format!("title with no preceding {NUMBER_MARKER:?} marker"))
    })
}

/// Drop the final character of `s` (usually the newline, but
/// unconditionally the last character whatever it is).
fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_topics(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn inline_title_with_closing_tag() {
        let file = write_topics("Number: 5\n<title> test query </title>\n");
        let topics = parse_topics(file.path()).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[&5], "test query");
    }

    #[test]
    fn inline_title_without_closing_tag() {
        let file = write_topics("<num> Number: 301\n<title> International Organized Crime\n");
        let topics = parse_topics(file.path()).unwrap();
        assert_eq!(topics[&301], "International Organized Crime");
    }

    #[test]
    fn empty_title_takes_next_line_verbatim() {
        let file = write_topics("Number: 7\n<title>\nobesity  medical treatment\n");
        let topics = parse_topics(file.path()).unwrap();
        assert_eq!(topics[&7], "obesity  medical treatment");
    }

    #[test]
    fn later_title_overwrites_earlier_one() {
        let file = write_topics("Number: 3\n<title> first\n<title> second\n");
        let topics = parse_topics(file.path()).unwrap();
        assert_eq!(topics[&3], "second");
    }

    #[test]
    fn multiple_topics() {
        let file = write_topics(
            "<top>\n<num> Number: 1\n<title> alpha\n</top>\n\
             <top>\n<num> Number: 2\n<title> beta\n</top>\n",
        );
        let topics = parse_topics(file.path()).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[&1], "alpha");
        assert_eq!(topics[&2], "beta");
    }

    #[test]
    fn number_slice_drops_final_character_even_without_newline() {
        // The identifier extraction is a positional slice that always drops
        // the line's last character. On a final line with no newline that
        // character is the digit itself, leaving nothing to parse.
        let file = write_topics("Number: 1\n<title> a\nNumber: 4");
        let err = parse_topics(file.path()).unwrap_err();
        assert!(matches!(err, TreckitError::InvalidId(_)));
    }

    #[test]
    fn title_before_number_is_an_error() {
        let file = write_topics("<title> orphan query\n");
        let err = parse_topics(file.path()).unwrap_err();
        assert!(matches!(err, TreckitError::Parse(_)));
    }

    #[test]
    fn non_integer_identifier_is_an_error() {
        let file = write_topics("Number: abc\n");
        let err = parse_topics(file.path()).unwrap_err();
        assert!(matches!(err, TreckitError::InvalidId(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = parse_topics("/nonexistent/topics.txt").unwrap_err();
        assert!(matches!(err, TreckitError::Io(_)));
    }
}
