//! Compression format detection and transparent decompression of log files.
//!
//! The format is identified from the first bytes of the file (magic numbers) and,
//! failing that, from the file extension. Decoding happens on the fly while lines are
//! read, so a compressed log is never materialised in full.

use async_compression::tokio::bufread::{BzDecoder, GzipDecoder, XzDecoder, ZstdDecoder};
use std::path::Path;
use tokio::io::{AsyncBufRead, BufReader};

/// Supported compression formats for transparent file access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// No compression - plain text file
    None,
    /// Gzip compression (.gz files)
    Gzip,
    /// Bzip2 compression (.bz2 files)
    Bzip2,
    /// XZ compression (.xz files)
    Xz,
    /// Zstandard compression (.zst, .zstd files)
    Zstd,
}

impl CompressionType {
    /// Get human-readable name for the compression type
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
        }
    }

    /// Check if this type represents a compressed format
    pub fn is_compressed(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Detect the compression format from the leading bytes of a file and its path
///
/// Magic numbers win over the extension, so a plain file that happens to be named
/// `app.log.gz` is only treated as gzip when its content is not recognised.
///
/// # Magic Numbers Used
/// - Gzip: `1f 8b` (RFC 1952)
/// - Bzip2: `42 5a 68` ("BZh" with block size)
/// - XZ: `fd 37 7a 58 5a 00` (XZ format specification)
/// - Zstd: `28 b5 2f fd` (Zstandard frame format)
pub fn detect_compression(magic: &[u8], path: &Path) -> CompressionType {
    detect_by_magic(magic)
        .or_else(|| detect_by_extension(path))
        .unwrap_or(CompressionType::None)
}

/// Detect compression format from magic bytes
fn detect_by_magic(magic: &[u8]) -> Option<CompressionType> {
    if magic.starts_with(&[0x1f, 0x8b]) {
        Some(CompressionType::Gzip)
    } else if magic.starts_with(&[0x42, 0x5a, 0x68]) {
        Some(CompressionType::Bzip2)
    } else if magic.starts_with(&[0x28, 0xb5, 0x2f, 0xfd]) {
        Some(CompressionType::Zstd)
    } else if magic.starts_with(&[0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00]) {
        Some(CompressionType::Xz)
    } else {
        None
    }
}

/// Detect compression format from file extension
fn detect_by_extension(path: &Path) -> Option<CompressionType> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "gz" => Some(CompressionType::Gzip),
        "bz2" => Some(CompressionType::Bzip2),
        "xz" => Some(CompressionType::Xz),
        "zst" | "zstd" => Some(CompressionType::Zstd),
        _ => None,
    }
}

/// Wrap a buffered reader so that it yields decompressed bytes
pub fn decoding_reader<R>(
    reader: R,
    compression: CompressionType,
) -> Box<dyn AsyncBufRead + Unpin + Send>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    match compression {
        CompressionType::None => Box::new(reader),
        CompressionType::Gzip => {
            let mut decoder = GzipDecoder::new(reader);
            // Rotated logs are often several gzip members appended together.
            decoder.multiple_members(true);
            Box::new(BufReader::new(decoder))
        }
        CompressionType::Bzip2 => Box::new(BufReader::new(BzDecoder::new(reader))),
        CompressionType::Xz => Box::new(BufReader::new(XzDecoder::new(reader))),
        CompressionType::Zstd => Box::new(BufReader::new(ZstdDecoder::new(reader))),
    }
}
