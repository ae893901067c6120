//! Document renderers.
//!
//! Each renderer turns a [`Story`] into the text of one output file.

mod html;
mod json;
mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use mcq_core::Story;

use crate::error::{CliError, Result};

/// Trait for output document renderers.
pub trait Renderer {
    /// File extension of the produced document.
    fn extension(&self) -> &'static str;

    /// Render the whole story.
    fn render(&self, story: &Story) -> Result<String>;
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Renderer for this format.
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::default()),
            Self::Text => Box::new(TextRenderer::default()),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidFormat(other.to_string())),
        }
    }
}
