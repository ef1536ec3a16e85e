//! Wire codec for the pipe-delimited frame protocol.
//!
//! One inbound frame is UTF-8 text of the form
//! `<credential>|<message>[|<model>]`. Replies are a single JSON body:
//! `{"response": ...}` on success, `{"error": ...}` on failure.

use serde_json::json;

use vschat_core::{DEFAULT_MODEL, Request, Response};

/// Field separator within one frame.
const DELIMITER: char = '|';

/// Decode one inbound frame into a request.
///
/// Fields are trimmed. A frame with fewer than two fields yields `None`:
/// nothing to process, no reply is sent. A third field, when present,
/// names the model even when it trims to empty; otherwise the default
/// model applies. Fields past the third are ignored.
#[must_use]
pub fn decode(frame: &str) -> Option<Request> {
    let fields: Vec<&str> = frame.split(DELIMITER).map(str::trim).collect();
    if fields.len() < 2 {
        return None;
    }

    let model = fields.get(2).copied().unwrap_or(DEFAULT_MODEL);
    Some(Request::from_credential(fields[0], fields[1], model))
}

/// Encode a response into the reply body written back to the client.
///
/// The encoding is deterministic and self-delimiting: a client reading
/// until the peer closes recovers exactly one JSON payload. The failure
/// status is internal and never serialized.
#[must_use]
pub fn encode(response: &Response) -> String {
    match response {
        Response::Success { reply } => json!({ "response": reply }).to_string(),
        Response::Failure { error, .. } => json!({ "error": error }).to_string(),
    }
}
