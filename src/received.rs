//! Received trace header parsing

use chrono::{DateTime, SecondsFormat};
use regex::Regex;
use std::sync::LazyLock;

// ... id <id> for <mailbox>; <date>
static RECEIVED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".* id ([^ ]+) for ([^ ;]+); (.*)").unwrap());

/// Fields pulled out of a `Received` header of the form
/// `... id <id> for <mailbox>; <date>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedTrace {
    /// Queue or message id assigned by the transfer agent
    pub id: String,

    /// Mailbox the message was received for
    pub destination: String,

    /// Everything after the semicolon, normally a mail date
    pub date_text: String,
}

impl ReceivedTrace {
    /// Match a `Received` header value. Returns `None` when the value has no
    /// `id ... for ...;` section.
    #[must_use]
    pub fn parse(received: &str) -> Option<Self> {
        let caps = RECEIVED_REGEX.captures(received)?;

        Some(Self {
            id: caps[1].to_string(),
            destination: caps[2].to_string(),
            date_text: caps[3].to_string(),
        })
    }

    /// The trailing date rendered as RFC3339, if it parses
    #[must_use]
    pub fn timestamp(&self) -> Option<String> {
        normalize_date(&self.date_text)
    }
}

/// Parse an RFC 2822 / RFC 5322 mail date and render it as RFC3339 with
/// second precision, keeping the original offset.
///
/// Surrounding whitespace and a trailing comment such as `(PDT)` are ignored.
/// A zero offset renders as `Z`.
#[must_use]
pub fn normalize_date(text: &str) -> Option<String> {
    let text = strip_trailing_comment(text.trim());

    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}

fn strip_trailing_comment(text: &str) -> &str {
    if text.ends_with(')')
        && let Some(start) = text.rfind('(')
    {
        return text[..start].trim_end();
    }
    text
}
