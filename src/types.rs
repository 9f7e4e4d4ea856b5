//! Core types for envelope extraction

use serde::Serialize;

/// Parsed header block of a message
///
/// Header names are stored lowercased in the order they appear. Values are
/// whatever the MIME parser produced (decoded, unfolded text).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    headers: Vec<(String, String)>,
}

impl Envelope {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    /// Append a header. Earlier headers with the same name take precedence on lookup.
    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers.push((name.as_ref().to_lowercase(), value.into()));
    }

    /// Value of the first header named `name`, or the empty string if absent
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map_or("", |(_, value)| value.as_str())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Envelope {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut envelope = Self::new();
        for (name, value) in iter {
            envelope.insert(name, value);
        }
        envelope
    }
}

/// One output row, derived from a single file
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvelopeRecord {
    /// Id from the Received trace, or the path when there is none
    pub id: String,

    /// Source file path
    pub path: String,

    /// RFC3339 timestamp from the Received trace, or the raw Date header
    pub date: String,

    /// Destination mailbox from the Received trace
    pub dst: String,

    pub to: String,
    pub from: String,
    pub subject: String,
    pub cc: String,
}

impl EnvelopeRecord {
    /// CSV header row
    pub const COLUMNS: [&'static str; 8] =
        ["id", "path", "date", "dst", "to", "from", "subject", "cc"];
}
