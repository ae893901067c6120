//! Print-ready HTML output. Browsers honor the `page-break` divs when the
//! document is printed or saved as PDF.

use mcq_core::{Alignment, Block, Boilerplate, Story};

use super::Renderer;
use crate::error::Result;

const STYLE: &str = "\
body { font-family: Helvetica, Arial, sans-serif; font-size: 12pt; margin: 0.75in; }
.set-image { display: block; width: 100px; height: 100px; margin: 0 auto; }
.summary { text-align: center; font-weight: bold; }
.boilerplate p { margin: 0; }
.set-title { text-align: center; font-size: 16pt; color: blue; }
.question { font-size: 14pt; font-weight: bold; margin-bottom: 6pt; }
.option { font-size: 12pt; margin: 0 0 12pt 0; }
.page-break { break-after: page; page-break-after: always; }
";

/// HTML document renderer.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    pub title: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: "Shuffled MCQs".to_string(),
        }
    }
}

impl Renderer for HtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, story: &Story) -> Result<String> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        out.push_str(&format!("<style>\n{}</style>\n</head>\n<body>\n", STYLE));

        for block in &story.blocks {
            render_block(&mut out, block);
        }

        out.push_str("</body>\n</html>\n");
        Ok(out)
    }
}

fn render_block(out: &mut String, block: &Block) {
    let html = match block {
        Block::Image { path } => format!(
            "<img class=\"set-image\" src=\"{}\" alt=\"\">\n",
            escape(&path.to_string_lossy())
        ),
        Block::Summary { text } => format!("<p class=\"summary\">{}</p>\n", escape(text)),
        Block::Boilerplate { content } => return render_boilerplate(out, content),
        Block::SetTitle { number } => format!("<h1 class=\"set-title\">Set {}</h1>\n", number),
        Block::Question { number, text } => {
            format!("<p class=\"question\">{}. {}</p>\n", number, escape(text))
        }
        Block::Option { label, text } => {
            format!("<p class=\"option\">{}. {}</p>\n", label, escape(text))
        }
        Block::PageBreak => "<div class=\"page-break\"></div>\n".to_string(),
    };
    out.push_str(&html);
}

fn render_boilerplate(out: &mut String, boilerplate: &Boilerplate) {
    if boilerplate.is_empty() {
        return;
    }

    out.push_str("<div class=\"boilerplate\">\n");
    for line in &boilerplate.lines {
        if line.is_empty() {
            out.push_str("<br>\n");
            continue;
        }
        out.push_str(&format!("<p style=\"text-align: {}\">", alignment(line.alignment)));
        for span in &line.spans {
            if span.bold {
                out.push_str(&format!("<b>{}</b>", escape(&span.text)));
            } else {
                out.push_str(&escape(&span.text));
            }
        }
        out.push_str("</p>\n");
    }
    out.push_str("</div>\n");
}

fn alignment(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

/// Escape text for HTML element and attribute content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
