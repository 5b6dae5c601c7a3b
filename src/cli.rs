//! Command-line argument resolution.

use crate::filter::{SeverityFilter, DEFAULT_PREFIXES};
use clap::{value_parser, Arg, ArgMatches, Command, ValueEnum};
use std::path::PathBuf;

/// File read when `-f` is not given
pub const DEFAULT_FILE: &str = "default.log";

/// When to emit ANSI color sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Always color
    #[default]
    Always,
    /// Color only when standard output is a terminal
    Auto,
    /// Never color
    Never,
}

/// Resolved settings for one run of the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub file: PathBuf,
    pub prefixes: String,
    pub color: ColorMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            prefixes: DEFAULT_PREFIXES.to_string(),
            color: ColorMode::Always,
        }
    }
}

impl ViewerConfig {
    /// Severity filter built from the configured prefixes
    pub fn filter(&self) -> SeverityFilter {
        SeverityFilter::from_letters(&self.prefixes)
    }

    /// Build the configuration from parsed arguments
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = Self::default();
        Self {
            file: matches
                .get_one::<PathBuf>("file")
                .cloned()
                .unwrap_or(defaults.file),
            prefixes: matches
                .get_one::<String>("prefixes")
                .cloned()
                .unwrap_or(defaults.prefixes),
            color: matches
                .get_one::<ColorMode>("color")
                .copied()
                .unwrap_or(defaults.color),
        }
    }
}

/// Command definition for the `log_viewer` binary
pub fn build_command() -> Command {
    Command::new("log_viewer")
        .version(crate::VERSION)
        .about("View a bracketed log file with aligned, color-coded columns")
        .long_about(
            "log_viewer reads lines of the form [timestamp][severity][caller][message], \
             keeps the severities selected by the prefix letters \
             (d=Debug, i=Info, w=Warning, e=Error, f=Fatal) and prints them \
             with aligned severity and caller columns.",
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to the log file to view")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_FILE),
        )
        .arg(
            Arg::new("prefixes")
                .short('p')
                .long("prefixes")
                .value_name("PREFIXES")
                .help("Severity letters to show (d, i, w, e, f)")
                .default_value(DEFAULT_PREFIXES),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_name("WHEN")
                .help("When to color the output")
                .value_parser(value_parser!(ColorMode))
                .default_value("always"),
        )
}
