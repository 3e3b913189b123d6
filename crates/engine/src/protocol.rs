//! Response protocol parser.
//!
//! The model signals its intent by embedding one of three literal markers in
//! its reply, each followed by a strict JSON payload:
//!
//! - `SEARCH_REQUEST:\n{"searchTerm": "<term>"}`
//! - `FEED_SELECTION:\n{"response": "<text>", "feedId": "<id>"}`
//! - `NEW_FEED:\n{"response": "<text>", "feed": { ... }}`
//!
//! Text without any marker is plain conversation. The marker protocol is
//! brittle by construction (a marker could appear incidentally in prose), so
//! it is isolated here: swapping it for structured function-calling would
//! not touch the orchestrator's state machine.

use serde::Deserialize;

use nf_domain::error::{Error, Result};
use nf_domain::feed::FeedProposal;

pub const SEARCH_REQUEST_MARKER: &str = "SEARCH_REQUEST:";
pub const FEED_SELECTION_MARKER: &str = "FEED_SELECTION:";
pub const NEW_FEED_MARKER: &str = "NEW_FEED:";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Intent
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The classified purpose of a single completion. Exactly one variant per
/// parsed completion; only `Search` is non-terminal for the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// The model wants the catalog searched for a term.
    Search { term: String },
    /// The model selected an existing feed.
    Selection { reply: String, feed_id: String },
    /// The model proposes synthesizing a new feed.
    Creation { reply: String, proposal: FeedProposal },
    /// Plain conversation, no action requested.
    Conversation { reply: String },
}

// ── Payload wire structs ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchPayload {
    search_term: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionPayload {
    response: String,
    feed_id: String,
}

#[derive(Debug, Deserialize)]
struct CreationPayload {
    response: String,
    feed: FeedProposal,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Parser
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Classify a raw completion into an [`Intent`].
///
/// The earliest-occurring marker in the text wins; later markers are
/// ignored (a reply that quotes a second marker in its prose is still
/// classified by the first one). Text without any marker defaults to
/// `Conversation` with the reply trimmed of surrounding whitespace; that
/// path never fails.
///
/// Malformed JSON after a recognized marker is a hard
/// [`Error::ProtocolParse`]: the caller must surface it rather than show
/// the user a reply full of broken payload text.
pub fn parse(raw: &str) -> Result<Intent> {
    let markers = [
        SEARCH_REQUEST_MARKER,
        FEED_SELECTION_MARKER,
        NEW_FEED_MARKER,
    ];

    let hit = markers
        .iter()
        .filter_map(|m| raw.find(m).map(|pos| (pos, *m)))
        .min_by_key(|(pos, _)| *pos);

    let Some((pos, marker)) = hit else {
        return Ok(Intent::Conversation {
            reply: raw.trim().to_string(),
        });
    };

    let tail = &raw[pos + marker.len()..];
    let payload = extract_json_object(tail)
        .ok_or_else(|| Error::ProtocolParse(format!("no JSON object after {marker}")))?;

    match marker {
        SEARCH_REQUEST_MARKER => {
            let p: SearchPayload = parse_payload(marker, payload)?;
            Ok(Intent::Search { term: p.search_term })
        }
        FEED_SELECTION_MARKER => {
            let p: SelectionPayload = parse_payload(marker, payload)?;
            Ok(Intent::Selection {
                reply: p.response,
                feed_id: p.feed_id,
            })
        }
        NEW_FEED_MARKER => {
            let p: CreationPayload = parse_payload(marker, payload)?;
            Ok(Intent::Creation {
                reply: p.response,
                proposal: p.feed,
            })
        }
        _ => unreachable!("marker set is fixed"),
    }
}

fn parse_payload<'a, T: Deserialize<'a>>(marker: &str, payload: &'a str) -> Result<T> {
    serde_json::from_str(payload)
        .map_err(|e| Error::ProtocolParse(format!("malformed {marker} payload: {e}")))
}

/// Extract the first balanced JSON object from `text`.
///
/// Scans for the opening brace, then tracks brace depth while respecting
/// string literals and escapes. Returns `None` when no object opens or the
/// braces never balance.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if escaped {
            escaped = false;
            continue;
        }
        match b {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_domain::feed::{FeedKind, GNewsCategory};

    #[test]
    fn plain_prose_is_conversation_trimmed() {
        let intent = parse("  What topics interest you?\n").unwrap();
        assert_eq!(
            intent,
            Intent::Conversation {
                reply: "What topics interest you?".into()
            }
        );
    }

    #[test]
    fn search_request_extracts_term() {
        let raw = "SEARCH_REQUEST:\n{\"searchTerm\": \"technology\"}";
        assert_eq!(
            parse(raw).unwrap(),
            Intent::Search {
                term: "technology".into()
            }
        );
    }

    #[test]
    fn selection_extracts_reply_and_feed_id() {
        let raw = "FEED_SELECTION:\n{\"response\": \"Found it\", \"feedId\": \"feed-123\"}";
        assert_eq!(
            parse(raw).unwrap(),
            Intent::Selection {
                reply: "Found it".into(),
                feed_id: "feed-123".into()
            }
        );
    }

    #[test]
    fn creation_extracts_proposal() {
        let raw = concat!(
            "NEW_FEED:\n",
            "{\"response\": \"Created a feed for you\", \"feed\": {",
            "\"name\": \"Technology News Feed\", \"type\": \"GNEWS\",",
            "\"gNewsCategory\": \"technology\", \"searchTerms\": [\"technology\"],",
            "\"tags\": [\"tech\"]}}"
        );
        match parse(raw).unwrap() {
            Intent::Creation { reply, proposal } => {
                assert_eq!(reply, "Created a feed for you");
                assert_eq!(proposal.name, "Technology News Feed");
                assert_eq!(proposal.kind, FeedKind::Gnews);
                assert_eq!(proposal.g_news_category, Some(GNewsCategory::Technology));
            }
            other => panic!("expected Creation, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_after_marker_is_hard_failure() {
        let raw = "NEW_FEED:\n{\"response\": \"oops\", \"feed\": {broken}}";
        assert!(matches!(parse(raw), Err(Error::ProtocolParse(_))));
    }

    #[test]
    fn missing_payload_after_marker_is_hard_failure() {
        assert!(matches!(
            parse("SEARCH_REQUEST: no json here"),
            Err(Error::ProtocolParse(_))
        ));
    }

    #[test]
    fn unbalanced_braces_are_hard_failure() {
        let raw = "SEARCH_REQUEST:\n{\"searchTerm\": \"tech\"";
        assert!(matches!(parse(raw), Err(Error::ProtocolParse(_))));
    }

    #[test]
    fn earliest_marker_wins() {
        // A selection reply that happens to mention SEARCH_REQUEST later in
        // its prose is still a selection.
        let raw = concat!(
            "FEED_SELECTION:\n{\"response\": \"Use SEARCH_REQUEST: next time\", ",
            "\"feedId\": \"f-9\"}"
        );
        match parse(raw).unwrap() {
            Intent::Selection { feed_id, .. } => assert_eq!(feed_id, "f-9"),
            other => panic!("expected Selection, got {other:?}"),
        }
    }

    #[test]
    fn leading_prose_before_marker_is_tolerated() {
        let raw = "Sure, let me look.\nSEARCH_REQUEST:\n{\"searchTerm\": \"climate\"}";
        assert_eq!(
            parse(raw).unwrap(),
            Intent::Search {
                term: "climate".into()
            }
        );
    }

    #[test]
    fn braces_inside_strings_do_not_confuse_extraction() {
        let raw = "FEED_SELECTION:\n{\"response\": \"curly {braces} and \\\"quotes\\\"\", \"feedId\": \"f-1\"}";
        match parse(raw).unwrap() {
            Intent::Selection { reply, feed_id } => {
                assert_eq!(reply, "curly {braces} and \"quotes\"");
                assert_eq!(feed_id, "f-1");
            }
            other => panic!("expected Selection, got {other:?}"),
        }
    }
}
