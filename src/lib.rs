//! # log_viewer - Terminal Viewer for Bracketed Log Files
//!
//! Reads log lines of the form `[timestamp][severity][caller][message]`, keeps the
//! severities selected by a string of filter letters and prints the survivors with
//! aligned, color-coded severity and caller columns.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line arguments and [`ViewerConfig`]
//! - [`entry`] - [`Severity`] and [`LogEntry`] parsing
//! - [`filter`] - Filter letters to [`SeverityFilter`]
//! - [`file_handler`] - Opening files, transparent decompression, line reading
//! - [`scan`] - Parse, filter and measure column widths
//! - [`render`] - Padding and coloring of retained entries
//! - [`app`] - [`LogViewer`] orchestration and error reporting
//! - [`error`] - Centralized error types

pub mod error;
pub mod file_handler;

pub mod cli;
pub mod entry;
pub mod filter;

pub mod app;
pub mod render;
pub mod scan;

// Re-export commonly used types for convenience
pub use app::LogViewer;
pub use cli::{ColorMode, ViewerConfig};
pub use entry::{LogEntry, Severity};
pub use error::{Result, ViewerError};
pub use filter::SeverityFilter;
pub use render::ColorTheme;
pub use scan::{ColumnWidths, ScanOutcome};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
