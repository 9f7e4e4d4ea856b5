// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email envelope metadata
//!
//! Walks a directory tree of MIME-encoded email files and dumps envelope
//! metadata for each one as a CSV row:
//!
//! ```text
//! id,path,date,dst,to,from,subject,cc
//! ```
//!
//! `id`, `dst` and `date` come from the first `Received` header when it has
//! the shape `... id <id> for <mailbox>; <date>`. Without it, `id` is the
//! file path, `dst` is empty and `date` is the raw `Date` header.
//!
//! # Example
//!
//! ```rust
//! use email_metadata::{extract_record, parse_envelope};
//!
//! let raw = b"Received: from mx by relay id ABC123 for user@example.com; \
//!             Mon, 02 Jan 2006 15:04:05 -0700\r\n\
//!             Subject: Hello\r\n\r\nBody";
//! let envelope = parse_envelope(raw).unwrap();
//! let record = extract_record("inbox/1.eml", &envelope);
//!
//! assert_eq!(record.id, "ABC123");
//! assert_eq!(record.dst, "user@example.com");
//! assert_eq!(record.date, "2006-01-02T15:04:05-07:00");
//! ```

mod error;
mod output;
mod parser;
mod received;
mod types;
mod walker;

pub use error::{Error, Result};
pub use output::RecordWriter;
pub use parser::{extract_record, parse_envelope};
pub use received::{ReceivedTrace, normalize_date};
pub use types::*;
pub use walker::{ScanSummary, scan};
