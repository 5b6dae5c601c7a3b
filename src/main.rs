//! log_viewer - colored, column-aligned viewer for bracketed log files

use anyhow::Result;
use log_viewer::cli::{build_command, ViewerConfig};
use log_viewer::LogViewer;
use std::io::ErrorKind;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Diagnostics go to stderr, controlled by RUST_LOG
    env_logger::init();

    let matches = build_command().get_matches();
    let config = ViewerConfig::from_matches(&matches);
    log::debug!("viewing {} with prefixes {:?}", config.file.display(), config.prefixes);

    let viewer = LogViewer::new(config);
    let mut stdout = std::io::stdout().lock();

    match viewer.run(&mut stdout).await {
        // Piping into `head` closes stdout early; that is not a failure.
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}
