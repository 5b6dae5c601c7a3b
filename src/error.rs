//! Error types for log_viewer.
//!
//! Every failure that ends a run is a [`ViewerError`]. The `Display` text of each
//! variant is exactly the message the user sees after the `log_viewer: ` prefix,
//! so the extra context carried by a variant is only reported through the `log`
//! facade.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for log_viewer operations.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The log file is missing, is not a regular file, or cannot be opened
    #[error("opening log file failed")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not split into exactly four bracketed segments
    #[error("parsing log failed")]
    ParseFailed { line_number: u64, segments: usize },

    /// Reading or decompressing the file failed part way through
    #[error("reading log file failed")]
    ReadFailed {
        line_number: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for log_viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Create an OpenFailed error for `path`
    pub fn open_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseFailed error for the given 1-based line number
    pub fn parse_failed(line_number: u64, segments: usize) -> Self {
        Self::ParseFailed {
            line_number,
            segments,
        }
    }

    /// Create a ReadFailed error for the line that could not be read
    pub fn read_failed(line_number: u64, source: std::io::Error) -> Self {
        Self::ReadFailed {
            line_number,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display_messages() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let open = ViewerError::open_failed("/test/file.log", not_found);
        assert_eq!(open.to_string(), "opening log file failed");

        let parse = ViewerError::parse_failed(3, 2);
        assert_eq!(parse.to_string(), "parsing log failed");

        let broken = std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt deflate stream");
        let read = ViewerError::read_failed(7, broken);
        assert_eq!(read.to_string(), "reading log file failed");
    }

    #[test]
    fn test_error_sources_preserved() {
        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let open = ViewerError::open_failed("/var/log/secret.log", denied);
        let source = open.source().expect("open error keeps its io source");
        assert_eq!(source.to_string(), "denied");

        assert!(ViewerError::parse_failed(1, 5).source().is_none());
    }

    #[test]
    fn test_parse_failed_context() {
        match ViewerError::parse_failed(12, 3) {
            ViewerError::ParseFailed {
                line_number,
                segments,
            } => {
                assert_eq!(line_number, 12);
                assert_eq!(segments, 3);
            }
            other => panic!("Expected ParseFailed variant, got {other:?}"),
        }
    }
}
