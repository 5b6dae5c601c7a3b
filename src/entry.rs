//! Parsed log lines and the severity enumeration.
//!
//! A log line has the shape `[timestamp][severity][caller][message]`. Parsing strips
//! exactly one leading and one trailing character and splits the remainder on the
//! `][` delimiter, which must yield exactly four segments. The delimiter is reserved:
//! a message that contains `][` produces extra segments and is rejected.

use crate::error::{Result, ViewerError};
use bstr::{BString, ByteSlice};
use std::fmt;

/// Separator between bracketed segments once the outer brackets are stripped
pub const SEGMENT_SEPARATOR: &str = "][";

/// Known severity labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// All severities in ascending order of importance
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Match an exact, capitalized label such as `Warning`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Debug" => Some(Self::Debug),
            "Info" => Some(Self::Info),
            "Warning" => Some(Self::Warning),
            "Error" => Some(Self::Error),
            "Fatal" => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Label as it appears in the log file
    pub fn label(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }

    /// Lowercase letter that selects this severity in a filter string
    pub fn filter_letter(self) -> char {
        match self {
            Self::Debug => 'd',
            Self::Info => 'i',
            Self::Warning => 'w',
            Self::Error => 'e',
            Self::Fatal => 'f',
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed log line
///
/// Fields hold the raw bytes of the line, so logs that are not valid UTF-8 are
/// reproduced exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// First segment, kept verbatim
    pub timestamp: BString,
    /// Second segment, kept verbatim even when it is not a known label
    pub severity: BString,
    /// Third segment, the function or location that emitted the line
    pub caller: BString,
    /// Fourth segment, printed without brackets
    pub message: BString,
}

impl LogEntry {
    /// Parse a single line (without its line terminator)
    ///
    /// The outer characters are stripped as whole UTF-8 sequences; an invalid byte
    /// counts as one character. `line_number` is 1-based and only used to describe a
    /// failure.
    pub fn parse(line: &[u8], line_number: u64) -> Result<Self> {
        let mut chars = line.char_indices();
        let inner = match (chars.next(), chars.next_back()) {
            (Some((_, first_end, _)), Some((last_start, _, _))) => &line[first_end..last_start],
            _ => return Err(ViewerError::parse_failed(line_number, 0)),
        };

        let segments: Vec<&[u8]> = inner.split_str(SEGMENT_SEPARATOR).collect();
        match segments.as_slice() {
            [timestamp, severity, caller, message] => Ok(Self {
                timestamp: BString::from(*timestamp),
                severity: BString::from(*severity),
                caller: BString::from(*caller),
                message: BString::from(*message),
            }),
            _ => Err(ViewerError::parse_failed(line_number, segments.len())),
        }
    }

    /// The recognised severity, if the label is one of the known five
    pub fn level(&self) -> Option<Severity> {
        self.severity.to_str().ok().and_then(Severity::from_label)
    }
}
