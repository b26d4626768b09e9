//! Human-readable status lines.
//!
//! These are for people, not scripts: labels, old and new values, and why
//! something failed. Styling is switched off when output is not a terminal.

use std::fmt::Display;
use std::io::{self, Write};

use console::{Emoji, Style};

static SUCCESS: Emoji<'_, '_> = Emoji("✨ ", "");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "");

#[derive(Debug, Clone)]
struct ReportStyles {
    label: Style,
    success: Style,
    failure: Style,
    muted: Style,
}

impl ReportStyles {
    fn new(colors: bool) -> Self {
        Self {
            label: Style::new().cyan().bold().force_styling(colors),
            success: Style::new().green().bold().force_styling(colors),
            failure: Style::new().red().bold().force_styling(colors),
            muted: Style::new().dim().force_styling(colors),
        }
    }
}

/// Writes status lines to any writer.
pub struct Report<W: Write> {
    out: W,
    styles: ReportStyles,
}

impl Report<io::Stdout> {
    /// A report on stdout, colored if stdout supports it.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), console::colors_enabled())
    }
}

impl<W: Write> Report<W> {
    pub fn new(out: W, colors: bool) -> Self {
        Self {
            out,
            styles: ReportStyles::new(colors),
        }
    }

    /// `Label: value`
    pub fn field(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            self.styles.label.apply_to(format!("{}:", label)),
            value
        )
    }

    pub fn success(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{}",
            SUCCESS,
            self.styles.success.apply_to(message)
        )
    }

    pub fn failure(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(
            self.out,
            "{}{}",
            FAILURE,
            self.styles.failure.apply_to(message)
        )
    }

    /// A secondary line, such as a hint or a dry-run notice.
    pub fn note(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", self.styles.muted.apply_to(message))
    }

    /// Writes `text` exactly as given.
    pub fn raw(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        if !text.is_empty() && !text.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
