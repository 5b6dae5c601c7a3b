//! Application orchestration layer
//!
//! [`LogViewer`] runs the scan and the render pass and owns the single error
//! channel: a failed run is reported as one `log_viewer: <message>` line on the
//! same writer that carries normal output.

use crate::cli::ViewerConfig;
use crate::error::ViewerError;
use crate::render::{write_entries, ColorTheme};
use crate::scan::scan_log;
use std::io::{self, Write};

/// Prefix of every error line
pub const ERROR_PREFIX: &str = "log_viewer";

/// Log viewer configured for one file and filter
pub struct LogViewer {
    config: ViewerConfig,
    theme: ColorTheme,
}

impl LogViewer {
    /// Create a viewer, resolving the color theme from the configured mode
    pub fn new(config: ViewerConfig) -> Self {
        let theme = ColorTheme::for_mode(config.color);
        Self::with_theme(config, theme)
    }

    /// Create a viewer with an explicit color theme
    pub fn with_theme(config: ViewerConfig, theme: ColorTheme) -> Self {
        Self { config, theme }
    }

    /// Configuration this viewer was built with
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Scan the configured file and write the formatted result to `out`
    ///
    /// Viewer failures are written to `out` and are not returned; only a failure to
    /// write to `out` itself is an `Err`.
    pub async fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let filter = self.config.filter();
        match scan_log(&self.config.file, &filter).await {
            Ok(outcome) => write_entries(out, &outcome, &self.theme),
            Err(err) => {
                log_failure(&err);
                writeln!(out, "{ERROR_PREFIX}: {err}")?;
                out.flush()
            }
        }
    }
}

fn log_failure(err: &ViewerError) {
    match err {
        ViewerError::OpenFailed { path, source } => {
            log::debug!("cannot open {}: {}", path.display(), source);
        }
        ViewerError::ParseFailed {
            line_number,
            segments,
        } => {
            log::debug!("line {line_number} has {segments} segments, expected 4");
        }
        ViewerError::ReadFailed {
            line_number,
            source,
        } => {
            log::debug!("read failed at line {line_number}: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ColorMode;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn config_for(file: &NamedTempFile, prefixes: &str) -> ViewerConfig {
        ViewerConfig {
            file: file.path().to_path_buf(),
            prefixes: prefixes.to_string(),
            color: ColorMode::Never,
        }
    }

    fn run_to_string(viewer: &LogViewer) -> String {
        let mut out = Vec::new();
        tokio_test::block_on(viewer.run(&mut out)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_new_resolves_theme_from_mode() {
        let config = ViewerConfig {
            color: ColorMode::Never,
            ..ViewerConfig::default()
        };
        let viewer = LogViewer::new(config.clone());
        assert_eq!(viewer.theme, ColorTheme::monochrome());
        assert_eq!(viewer.config(), &config);
    }

    #[test]
    fn test_run_prints_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[t1][Info][main.Run][started]").unwrap();
        writeln!(file, "[t2][Debug][x][skipped]").unwrap();

        let viewer = LogViewer::new(config_for(&file, "i"));
        assert_eq!(run_to_string(&viewer), "[t1][Info][main.Run]started\n");
    }

    #[test]
    fn test_run_reports_parse_failure_on_output() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[t1][Info][main.Run][started]").unwrap();
        writeln!(file, "[a][b]").unwrap();

        let viewer = LogViewer::new(config_for(&file, "diwef"));
        assert_eq!(run_to_string(&viewer), "log_viewer: parsing log failed\n");
    }
}
