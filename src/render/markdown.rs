//! Markdown rendering for reports.

use crate::error::{Error, Result};
use crate::model::{Entity, Html, Markdown, Report, Section, Text};

use super::Renderer;

/// Deepest heading Markdown can express.
const MAX_HEADING_LEVEL: u32 = 6;

/// Convert a report to Markdown.
pub fn to_markdown(report: &Report) -> Result<String> {
    report.render_with(&MarkdownRenderer::new())
}

/// Markdown renderer.
///
/// The report title goes into YAML frontmatter, sections become `#`
/// headings, HTML leaves pass through as inline HTML and Markdown leaves
/// are copied as is.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    escape_special_chars: bool,
}

impl MarkdownRenderer {
    /// Create a Markdown renderer that escapes text leaves.
    pub fn new() -> Self {
        Self {
            escape_special_chars: true,
        }
    }

    /// Enable or disable escaping of Markdown syntax in text leaves.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    fn name(&self) -> &str {
        "markdown"
    }

    fn render_report(&self, report: &Report) -> Result<String> {
        let mut output = format!("---\ntitle: \"{}\"\n---\n\n", escape_yaml(&report.title));
        output.push_str(&self.body(Entity::Report(report))?);

        // Drop the blank-line separators after the last block, keep its content
        while output.ends_with('\n') {
            output.pop();
        }
        output.push('\n');
        Ok(output)
    }

    fn render_section(&self, section: &Section) -> Result<String> {
        let level = section.level();
        if level > MAX_HEADING_LEVEL {
            return Err(Error::unsupported_level(level, self.name()));
        }
        let prefix = "#".repeat(level as usize);
        let body = self.body(Entity::Section(section))?;
        Ok(format!("{} {}\n\n{}", prefix, section.title, body))
    }

    fn render_html(&self, html: &Html) -> Result<String> {
        Ok(format!("{}\n\n", html.html))
    }

    fn render_text(&self, text: &Text) -> Result<String> {
        let content = if self.escape_special_chars {
            escape_markdown(&text.text)
        } else {
            text.text.clone()
        };
        Ok(format!("{}\n\n", content))
    }

    fn render_markdown(&self, markdown: &Markdown) -> Result<String> {
        Ok(format!("{}\n\n", markdown.markdown))
    }
}

/// Escape text so that it renders literally.
///
/// Inline syntax is escaped anywhere; block markers (`#`, `>`, `-`, `+`
/// and `1.`-style list numbers) only where they open a line.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            result.push('\n');
        }
        let rest = line.trim_start_matches(' ');
        result.push_str(&line[..line.len() - rest.len()]);
        let rest = escape_line_start(rest, &mut result);
        escape_inline(rest, &mut result);
    }
    result
}

/// Escape a block marker at the start of `line`, returning the remainder.
fn escape_line_start<'a>(line: &'a str, out: &mut String) -> &'a str {
    if let Some(c @ ('#' | '>' | '-' | '+')) = line.chars().next() {
        out.push('\\');
        out.push(c);
        return &line[1..];
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && matches!(line.as_bytes().get(digits), Some(b'.' | b')')) {
        out.push_str(&line[..digits]);
        out.push('\\');
        out.push_str(&line[digits..=digits]);
        return &line[digits + 1..];
    }
    line
}

fn escape_inline(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            // Core formatting
            '\\' | '`' | '*' | '_' |
            // Links, images, tables and inline HTML
            '[' | ']' | '|' | '<' |
            // Entity references
            '&' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
