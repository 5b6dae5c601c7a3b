//! Second pass: pad, color and print retained entries.
//!
//! Padding is computed from the plain text of each column, then the padded text is
//! wrapped in ANSI color sequences so escape codes never affect alignment. Field
//! bytes are written exactly as they were read.

use crate::cli::ColorMode;
use crate::entry::{LogEntry, Severity};
use crate::scan::{ColumnWidths, ScanOutcome};
use bstr::ByteSlice;
use ratatui::crossterm::style::{Color, SetForegroundColor};
use ratatui::crossterm::QueueableCommand;
use std::io::{self, IsTerminal, Write};

/// Colors applied to the severity and caller columns
///
/// `None` leaves a column uncolored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTheme {
    pub debug: Option<Color>,
    pub info: Option<Color>,
    pub warning: Option<Color>,
    pub error: Option<Color>,
    pub fatal: Option<Color>,
    pub caller: Option<Color>,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            debug: Some(Color::DarkCyan),
            info: Some(Color::DarkGreen),
            warning: Some(Color::DarkYellow),
            error: Some(Color::DarkRed),
            fatal: Some(Color::DarkRed),
            caller: Some(Color::DarkMagenta),
        }
    }
}

impl ColorTheme {
    /// Theme that emits no escape sequences at all
    pub fn monochrome() -> Self {
        Self {
            debug: None,
            info: None,
            warning: None,
            error: None,
            fatal: None,
            caller: None,
        }
    }

    /// Pick a theme for `mode`, checking stdout when the mode is `Auto`
    pub fn for_mode(mode: ColorMode) -> Self {
        let colored = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal(),
        };
        if colored {
            Self::default()
        } else {
            Self::monochrome()
        }
    }

    /// Color for a recognised severity
    pub fn severity_color(&self, severity: Severity) -> Option<Color> {
        match severity {
            Severity::Debug => self.debug,
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Fatal => self.fatal,
        }
    }
}

/// Write `text` padded with spaces to `width` characters, wrapped in `color`
fn write_column<W: Write>(
    out: &mut W,
    text: &[u8],
    width: usize,
    color: Option<Color>,
) -> io::Result<()> {
    if let Some(color) = color {
        out.queue(SetForegroundColor(color))?;
    }
    out.write_all(text)?;
    let padding = width.saturating_sub(text.chars().count());
    write!(out, "{:padding$}", "")?;
    if color.is_some() {
        out.queue(SetForegroundColor(Color::Reset))?;
    }
    Ok(())
}

/// Write one entry as `[timestamp][severity][caller]message` followed by a newline
pub fn write_entry<W: Write>(
    out: &mut W,
    entry: &LogEntry,
    widths: &ColumnWidths,
    theme: &ColorTheme,
) -> io::Result<()> {
    let severity_color = entry
        .level()
        .and_then(|level| theme.severity_color(level));

    out.write_all(b"[")?;
    out.write_all(&entry.timestamp)?;
    out.write_all(b"][")?;
    write_column(out, &entry.severity, widths.severity, severity_color)?;
    out.write_all(b"][")?;
    write_column(out, &entry.caller, widths.caller, theme.caller)?;
    out.write_all(b"]")?;
    out.write_all(&entry.message)?;
    out.write_all(b"\n")
}

/// Write every retained entry of `outcome` in file order
pub fn write_entries<W: Write>(
    out: &mut W,
    outcome: &ScanOutcome,
    theme: &ColorTheme,
) -> io::Result<()> {
    for entry in &outcome.entries {
        write_entry(out, entry, &outcome.widths, theme)?;
    }
    out.flush()
}
