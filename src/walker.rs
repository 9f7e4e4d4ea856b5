//! Directory traversal: one CSV row per message file

use crate::error::{Error, Result};
use crate::output::RecordWriter;
use crate::parser::{extract_record, parse_envelope};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Counts reported at the end of a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Rows written, one per parsed file
    pub rows: usize,

    /// Files skipped because they could not be read or their header block did not parse
    pub skipped: usize,
}

/// Walk `root` and write the header row followed by one row per file to `out`.
///
/// Entries are visited in file-name order within each directory. Directories
/// produce no row. A file that cannot be read or whose headers fail to parse
/// is logged and skipped; a walk error or a file that cannot be opened stops
/// the scan, with every row written so far already flushed to `out`.
///
/// Paths are written as displayed, so non-UTF-8 bytes in a file name become
/// U+FFFD in the `path` (and fallback `id`) column.
pub fn scan<W: Write>(root: &Path, out: W) -> Result<ScanSummary> {
    let mut writer = RecordWriter::new(out)?;
    let mut summary = ScanSummary::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();

        match read_message(path).and_then(|raw| parse_envelope(&raw)) {
            Ok(envelope) => {
                let record = extract_record(&path.display().to_string(), &envelope);
                writer.write(&record)?;
                summary.rows += 1;
            }
            Err(e) if e.is_recoverable() => {
                warn!("read email header for {} err {e}", path.display());
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

fn read_message(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut raw = Vec::new();
    file.read_to_end(&mut raw).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(raw)
}
