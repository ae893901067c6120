//! Plain-text output. Pages are separated by form feeds.

use mcq_core::{Alignment, Block, Story};

use super::Renderer;
use crate::error::Result;

const PAGE_BREAK: char = '\x0c';

/// Plain-text document renderer.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Line width used for centered and right-aligned text.
    pub width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { width: 72 }
    }
}

impl TextRenderer {
    fn align(&self, text: &str, alignment: Alignment) -> String {
        let len = text.chars().count();
        let pad = self.width.saturating_sub(len);
        match alignment {
            Alignment::Left => text.to_string(),
            Alignment::Center => format!("{}{}", " ".repeat(pad / 2), text),
            Alignment::Right => format!("{}{}", " ".repeat(pad), text),
        }
    }
}

impl Renderer for TextRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, story: &Story) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        for block in &story.blocks {
            match block {
                Block::Image { path } => lines.push(format!("[image: {}]", path.display())),
                Block::Summary { text } => lines.push(self.align(text, Alignment::Center)),
                Block::Boilerplate { content } => {
                    lines.extend(
                        content
                            .lines
                            .iter()
                            .map(|line| self.align(&line.plain_text(), line.alignment)),
                    );
                }
                Block::SetTitle { number } => {
                    lines.push(String::new());
                    lines.push(self.align(&format!("Set {}", number), Alignment::Center));
                    lines.push(String::new());
                }
                Block::Question { number, text } => {
                    lines.push(format!("{}. {}", number, text));
                }
                Block::Option { label, text } => lines.push(format!("   {}. {}", label, text)),
                Block::PageBreak => lines.push(PAGE_BREAK.to_string()),
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}
