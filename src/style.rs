//! Styling capability injected into the help renderer.
//!
//! The renderer never calls a color library directly. It receives a [`Palette`]
//! of string-to-string functions, so tests can swap in [`Palette::plain`] and
//! layout code can measure text with [`visible_width`] regardless of styling.

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use unicode_width::UnicodeWidthStr;

/// Wraps text in styling; the visible text must be unchanged.
pub type StyleFn = fn(&str) -> String;

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Named highlight functions used by the renderer.
#[derive(Clone, Copy)]
pub struct Palette {
    /// Highlights command heads, signatures, and option names.
    pub info: StyleFn,
    /// Highlights section labels.
    pub label: StyleFn,
}

fn blue(text: &str) -> String {
    text.blue().to_string()
}

fn yellow(text: &str) -> String {
    text.yellow().to_string()
}

fn identity(text: &str) -> String {
    text.to_string()
}

impl Palette {
    pub fn ansi() -> Self {
        Self {
            info: blue,
            label: yellow,
        }
    }

    pub fn plain() -> Self {
        Self {
            info: identity,
            label: identity,
        }
    }

    /// Resolve a palette for stdout. Respects NO_COLOR and TTY in auto mode.
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Always => Self::ansi(),
            ColorMode::Never => Self::plain(),
            ColorMode::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                if !no_color && std::io::stdout().is_terminal() {
                    Self::ansi()
                } else {
                    Self::plain()
                }
            }
        }
    }

    pub fn info(&self, text: &str) -> String {
        (self.info)(text)
    }

    pub fn label(&self, text: &str) -> String {
        (self.label)(text)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let styled = self.info("x") != "x" || self.label("x") != "x";
        f.debug_struct("Palette").field("styled", &styled).finish()
    }
}

/// Terminal width of `text` with ANSI escape sequences removed.
pub fn visible_width(text: &str) -> usize {
    strip_ansi_escapes::strip_str(text).width()
}

/// Pad `text` with trailing spaces until its visible width reaches `width`.
/// Text already at or past `width` is returned unchanged.
pub fn right_pad(text: &str, width: usize) -> String {
    let visible = visible_width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(visible));
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(visible)));
    padded
}

/// Prefix every line of `text`, splitting on `\n` so a trailing newline keeps its
/// empty last line. Empty lines stay empty so no output line ends in whitespace.
pub fn indent(text: &str, prefix: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect()
}
