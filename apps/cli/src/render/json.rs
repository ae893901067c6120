use mcq_core::Story;

use super::Renderer;
use crate::error::Result;

/// Pretty-printed JSON dump of the story blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, story: &Story) -> Result<String> {
        let mut out = serde_json::to_string_pretty(story)?;
        out.push('\n');
        Ok(out)
    }
}
