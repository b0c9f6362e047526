//! HTML rendering for reports.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::model::{Entity, Html, Markdown, Report, Section, Text};

use super::convert::{default_converter, MarkdownConverter};
use super::Renderer;

/// Convert a report to an HTML document using the default converter.
pub fn to_html(report: &Report) -> Result<String> {
    report.render_with(&HtmlRenderer::new())
}

/// HTML renderer.
///
/// Titles and raw HTML leaves are emitted verbatim; text leaves are
/// escaped; Markdown leaves go through the configured converter.
#[derive(Clone)]
pub struct HtmlRenderer {
    converter: Arc<dyn MarkdownConverter>,
}

impl HtmlRenderer {
    /// Create an HTML renderer with the default Markdown converter.
    pub fn new() -> Self {
        Self {
            converter: default_converter(),
        }
    }

    /// Use a different Markdown converter.
    pub fn with_converter(mut self, converter: impl MarkdownConverter + 'static) -> Self {
        self.converter = Arc::new(converter);
        self
    }

    /// Use a shared Markdown converter.
    pub fn with_shared_converter(mut self, converter: Arc<dyn MarkdownConverter>) -> Self {
        self.converter = converter;
        self
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HtmlRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlRenderer").finish_non_exhaustive()
    }
}

impl Renderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn render_report(&self, report: &Report) -> Result<String> {
        let body = self.body(Entity::Report(report))?;
        Ok(format!(
            "<html>
<head>
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
",
            title = report.title,
            body = body
        ))
    }

    fn render_section(&self, section: &Section) -> Result<String> {
        let body = self.body(Entity::Section(section))?;
        Ok(format!(
            "  <h{level}>{title}</h{level}>\n{body}",
            level = section.level(),
            title = section.title,
            body = body
        ))
    }

    fn render_html(&self, html: &Html) -> Result<String> {
        Ok(html.html.clone())
    }

    fn render_text(&self, text: &Text) -> Result<String> {
        Ok(escape_html(&text.text).replace('\n', "<br/>\n"))
    }

    fn render_markdown(&self, markdown: &Markdown) -> Result<String> {
        self.converter.convert(&markdown.markdown)
    }
}

/// Escape the characters HTML reserves in text content.
///
/// Each character is replaced once, so the `&` of an entity produced for
/// `<` or `>` is never escaped again.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
