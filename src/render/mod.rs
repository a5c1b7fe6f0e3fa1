//! Renderers: turn a [`RenderPayload`] into displayable output.
//!
//! Every renderer is deterministic and infallible for a well-formed payload.

mod json;
mod markdown;
mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::navigator::RenderPayload;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

/// Title block printed above a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// First line, the platform name.
    pub title: String,
    /// One-sentence description under the title.
    pub tagline: String,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            title: "Drug Repositioning Knowledge Platform".to_string(),
            tagline: "A research-oriented platform for organizing drug repurposing evidence by drug, target, and disease."
                .to_string(),
        }
    }
}

/// Output medium for a payload.
pub trait Renderer {
    /// Renders one section.
    fn render(&self, payload: &RenderPayload<'_>) -> String;

    /// Renders the title block.
    fn render_banner(&self, banner: &Banner) -> String;

    /// Renders a full page: the optional banner followed by the section.
    fn render_page(&self, banner: Option<&Banner>, payload: &RenderPayload<'_>) -> String {
        let section = self.render(payload);
        match banner {
            Some(banner) => format!("{}\n{section}", self.render_banner(banner)),
            None => section,
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Plain terminal text.
    #[default]
    Text,
    /// Markdown.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

impl Format {
    /// Every format.
    pub const ALL: [Self; 3] = [Self::Text, Self::Markdown, Self::Json];

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }

    /// The renderer for this format.
    #[must_use]
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected text, markdown or json)")),
        }
    }
}

/// Renders a payload in the given format, without a banner.
#[must_use]
pub fn render(payload: &RenderPayload<'_>, format: Format) -> String {
    format.renderer().render(payload)
}

/// Line buffer shared by the text-based renderers.
#[derive(Debug, Default)]
pub(crate) struct Doc {
    out: String,
}

impl Doc {
    pub(crate) fn line(&mut self, s: impl AsRef<str>) {
        self.out.push_str(s.as_ref());
        self.out.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    /// Adds `label: value` unless the value is empty.
    pub(crate) fn field(&mut self, label: &str, value: &str, bold: bool) {
        if value.trim().is_empty() {
            return;
        }
        if bold {
            self.line(format!("**{label}:** {value}"));
        } else {
            self.line(format!("{label}: {value}"));
        }
    }

    pub(crate) fn finish(mut self) -> String {
        while self.out.ends_with("\n\n") {
            self.out.pop();
        }
        self.out
    }
}
