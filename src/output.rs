//! CSV row output

use crate::error::Result;
use crate::types::EnvelopeRecord;
use std::io::Write;

/// Writes envelope records as CSV, one flush per row
///
/// The header row is written on construction so that it is present even
/// when no record follows.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        inner.write_record(EnvelopeRecord::COLUMNS)?;
        inner.flush()?;

        Ok(Self { inner })
    }

    /// Write one row and flush it through to the underlying stream
    pub fn write(&mut self, record: &EnvelopeRecord) -> Result<()> {
        self.inner.serialize(record)?;
        self.inner.flush()?;
        Ok(())
    }
}
