//! Line-oriented access to log files.
//!
//! [`LogReader`] owns the open file (and its decoder, for compressed logs) and hands
//! out one line at a time with the terminator removed. The handle is released when
//! the reader is dropped, on every exit path of the caller.

pub mod compression;
pub mod validation;

pub use compression::{detect_compression, CompressionType};
pub use validation::validate_file_path;

use crate::error::{Result, ViewerError};
use bstr::BString;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Sequential reader over the lines of a (possibly compressed) log file
pub struct LogReader {
    inner: Box<dyn AsyncBufRead + Unpin + Send>,
    path: PathBuf,
    compression: CompressionType,
    buffer: Vec<u8>,
    lines_read: u64,
}

impl LogReader {
    /// Open `path` for reading
    ///
    /// # Process
    /// 1. Validate that the path is an existing regular file
    /// 2. Peek at the first bytes to detect compression
    /// 3. Wrap the file in the matching decoder
    pub async fn open(path: &Path) -> Result<Self> {
        validate_file_path(path).await?;

        let file = File::open(path)
            .await
            .map_err(|e| ViewerError::open_failed(path, e))?;
        let mut reader = BufReader::new(file);

        let magic = reader
            .fill_buf()
            .await
            .map_err(|e| ViewerError::open_failed(path, e))?;
        let compression = detect_compression(magic, path);

        if compression.is_compressed() {
            log::debug!("decompressing {} as {}", path.display(), compression.name());
        } else {
            log::debug!("opened {}", path.display());
        }

        Ok(Self {
            inner: compression::decoding_reader(reader, compression),
            path: path.to_path_buf(),
            compression,
            buffer: Vec::new(),
            lines_read: 0,
        })
    }

    /// Read the next line without its `\n` or `\r\n` terminator
    ///
    /// Returns `Ok(None)` at end of file. The bytes are returned as read, whether or
    /// not they are valid UTF-8.
    pub async fn next_line(&mut self) -> Result<Option<BString>> {
        self.buffer.clear();
        let read = self
            .inner
            .read_until(b'\n', &mut self.buffer)
            .await
            .map_err(|e| ViewerError::read_failed(self.lines_read + 1, e))?;
        if read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        self.lines_read += 1;
        Ok(Some(BString::from(self.buffer.as_slice())))
    }

    /// Number of lines returned so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Path of the file being read
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compression detected when the file was opened
    pub fn compression(&self) -> CompressionType {
        self.compression
    }
}
