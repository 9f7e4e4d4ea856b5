//! Envelope parsing and row extraction

use crate::error::{Error, Result};
use crate::received::ReceivedTrace;
use crate::types::{Envelope, EnvelopeRecord};
use tracing::debug;

/// Parse the header block of a raw message. The body is never touched.
///
/// Input that does not start with a `Name: value` header block is rejected
/// with [`Error::Parse`]. An empty file parses as an empty envelope.
pub fn parse_envelope(raw: &[u8]) -> Result<Envelope> {
    let (headers, _body_offset) =
        mailparse::parse_headers(raw).map_err(|e| Error::Parse(e.to_string()))?;

    if headers.is_empty() && !raw.is_empty() {
        return Err(Error::Parse("no header fields found".into()));
    }

    if let Some(bad) = headers.iter().find(|h| !is_field_name(&h.get_key())) {
        return Err(Error::Parse(format!(
            "malformed header name {:?}",
            bad.get_key()
        )));
    }

    Ok(headers
        .iter()
        .map(|h| (h.get_key(), h.get_value()))
        .collect())
}

// RFC 5322 field names: printable US-ASCII except colon
fn is_field_name(key: &str) -> bool {
    let key = key.trim_end();
    !key.is_empty() && key.bytes().all(|b| (33..=126).contains(&b) && b != b':')
}

/// Derive the output row for one file.
///
/// Never fails: a missing or unmatched `Received` header falls back to the
/// path for `id`, an empty `dst` and the raw `Date` header for `date`.
#[must_use]
pub fn extract_record(path: &str, envelope: &Envelope) -> EnvelopeRecord {
    let trace = ReceivedTrace::parse(envelope.get("received"));

    let date = trace
        .as_ref()
        .and_then(ReceivedTrace::timestamp)
        .unwrap_or_else(|| envelope.get("date").to_string());

    let (id, dst) = trace.map_or_else(
        || (path.to_string(), String::new()),
        |t| (t.id, t.destination),
    );

    debug!("Extracted {id} from {path}");

    EnvelopeRecord {
        id,
        path: path.to_string(),
        date,
        dst,
        to: envelope.get("to").to_string(),
        from: envelope.get("from").to_string(),
        subject: envelope.get("subject").to_string(),
        cc: envelope.get("cc").to_string(),
    }
}
