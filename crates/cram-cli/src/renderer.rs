//! Terminal output for the Markdown built by the display wrappers.
//!
//! With color on, each line goes through a termimad skin and headings keep
//! their hash marks. With `--no-color` the Markdown is written untouched so
//! scripts can grep it.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Writes command output to stdout, styled or plain.
pub struct TerminalRenderer {
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            skin: rich_enabled.then(study_skin),
        }
    }

    /// Renders `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, markdown)
            .and_then(|()| out.flush())
            .context("Failed to write output")
    }

    fn write_to(&self, out: &mut impl Write, markdown: &str) -> io::Result<()> {
        let Some(skin) = &self.skin else {
            return out.write_all(markdown.as_bytes());
        };
        for line in markdown.lines() {
            if line.starts_with('#') {
                writeln!(out, "{}", line.with(Color::Cyan).bold())?;
            } else {
                writeln!(out, "{}", skin.inline(line))?;
            }
        }
        Ok(())
    }
}

// Task titles in bold, overdue markers in italics, grid rows as inline code.
fn study_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.italic.set_fg(Color::Red);
    skin.inline_code.set_fg(Color::Green);
    skin.inline_code.set_bg(Color::AnsiValue(236));
    skin
}
