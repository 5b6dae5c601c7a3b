//! File validation run before a log file is opened.

use crate::error::{Result, ViewerError};
use std::path::Path;

/// Check that `path` names an existing regular file
///
/// # Error Cases
/// - File does not exist or its metadata cannot be read
/// - Path points to a directory or another non-regular file
pub async fn validate_file_path(path: &Path) -> Result<()> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ViewerError::open_failed(path, e))?;

    if !metadata.is_file() {
        return Err(ViewerError::open_failed(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Not a regular file"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[tokio::test]
    async fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "[ts][Info][main][ready]").expect("Failed to write test content");
        assert!(validate_file_path(file.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_empty_file_is_allowed() {
        let file = NamedTempFile::new().expect("Failed to create temp file");
        assert!(validate_file_path(file.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_validate_nonexistent_file() {
        let missing = Path::new("/this/file/does/not/exist.log");
        match validate_file_path(missing).await {
            Err(ViewerError::OpenFailed { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected OpenFailed for missing file, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_validate_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        match validate_file_path(temp_dir.path()).await {
            Err(ViewerError::OpenFailed { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
            }
            other => panic!("Expected OpenFailed for directory, got {other:?}"),
        }
    }
}
