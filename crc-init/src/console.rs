//! Human-readable status output.
//!
//! All user-facing report lines go through [`Console`], which prefixes status
//! glyphs and applies colors. Colors are off when the console is built with
//! `color = false`; `colored` additionally honors `NO_COLOR` and skips escape
//! codes when stdout is not a terminal.

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::{Color, Colorize};

/// Width of the horizontal rules framing the summary.
pub const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warning,
}

impl Status {
    pub fn glyph(self) -> &'static str {
        match self {
            Status::Success => "✓",
            Status::Info => "→",
            Status::Warning => "⚠",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Status::Success => Color::Green,
            Status::Info => Color::Blue,
            Status::Warning => Color::Yellow,
        }
    }
}

pub struct Console<W> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}").context("write to console")
    }

    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }

    /// `<glyph> <text>`, glyph colored by status.
    pub fn status(&mut self, status: Status, text: impl Display) -> Result<()> {
        let glyph = self.paint(status.glyph(), status.color());
        self.line(format_args!("{glyph} {text}"))
    }

    /// Indented follow-up line under a status line.
    pub fn hint(&mut self, text: impl Display) -> Result<()> {
        let glyph = self.paint(Status::Info.glyph(), Status::Info.color());
        self.line(format_args!("   {glyph} {text}"))
    }

    /// Whole line in one color.
    pub fn banner(&mut self, color: Color, text: &str) -> Result<()> {
        let painted = self.paint(text, color);
        self.line(painted)
    }

    /// Colored label followed by plain text.
    pub fn labeled(&mut self, label: &str, text: &str) -> Result<()> {
        let painted = self.paint(label, Color::Blue);
        if text.is_empty() {
            self.line(painted)
        } else {
            self.line(format_args!("{painted} {text}"))
        }
    }

    pub fn rule(&mut self) -> Result<()> {
        self.line("━".repeat(RULE_WIDTH))
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Console<Vec<u8>>) -> Result<()>) -> String {
        let mut console = Console::new(Vec::new(), false);
        f(&mut console).expect("write");
        String::from_utf8(console.into_inner()).expect("utf8")
    }

    #[test]
    fn status_lines_use_glyphs() {
        let out = render(|c| {
            c.status(Status::Success, "done")?;
            c.status(Status::Info, "skipped")?;
            c.status(Status::Warning, "missing")
        });
        assert_eq!(out, "✓ done\n→ skipped\n⚠ missing\n");
    }

    #[test]
    fn hint_is_indented() {
        let out = render(|c| c.hint("Download from: x"));
        assert_eq!(out, "   → Download from: x\n");
    }

    #[test]
    fn rule_spans_full_width() {
        let out = render(|c| c.rule());
        assert_eq!(out.trim_end().chars().count(), RULE_WIDTH);
    }

    #[test]
    fn labeled_without_text_prints_label_only() {
        let out = render(|c| {
            c.labeled("🚀 Next steps:", "")?;
            c.labeled("📚 Documentation:", "docs.md")
        });
        assert_eq!(out, "🚀 Next steps:\n📚 Documentation: docs.md\n");
    }
}
