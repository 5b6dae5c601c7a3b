//! First pass over a log file: parse, filter and measure column widths.
//!
//! Nothing is printed here. The scan either returns every retained entry together
//! with the final column widths, or stops at the first line that cannot be read or
//! parsed.

use crate::entry::LogEntry;
use crate::error::Result;
use crate::file_handler::LogReader;
use crate::filter::SeverityFilter;
use bstr::ByteSlice;
use std::path::Path;

/// Widest severity label and caller among retained entries, in characters
///
/// An invalid UTF-8 byte counts as one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnWidths {
    pub severity: usize,
    pub caller: usize,
}

impl ColumnWidths {
    /// Widen the columns if `entry` does not fit
    pub fn observe(&mut self, entry: &LogEntry) {
        self.severity = self.severity.max(entry.severity.chars().count());
        self.caller = self.caller.max(entry.caller.chars().count());
    }
}

/// Entries retained by a scan, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub entries: Vec<LogEntry>,
    pub widths: ColumnWidths,
    pub lines_read: u64,
}

/// Open `path` and scan it with `filter`
pub async fn scan_log(path: &Path, filter: &SeverityFilter) -> Result<ScanOutcome> {
    let mut reader = LogReader::open(path).await?;
    scan_lines(&mut reader, filter).await
}

/// Scan every remaining line of `reader`
///
/// The first line that fails to parse aborts the scan; entries retained before it are
/// discarded along with the error.
pub async fn scan_lines(reader: &mut LogReader, filter: &SeverityFilter) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    while let Some(line) = reader.next_line().await? {
        let entry = LogEntry::parse(&line, reader.lines_read())?;
        if filter.accepts(&entry) {
            outcome.widths.observe(&entry);
            outcome.entries.push(entry);
        }
    }

    outcome.lines_read = reader.lines_read();
    log::debug!(
        "scanned {} lines from {} (compression: {}), retained {}",
        outcome.lines_read,
        reader.path().display(),
        reader.compression().name(),
        outcome.entries.len()
    );

    Ok(outcome)
}
