//! LaTeX rendering for reports.
//!
//! LaTeX has no counterpart for raw HTML or Markdown leaves. By default they
//! abort the render with [`Error::UnsupportedNodeKind`]; with
//! `ignore_unsupported` they render as nothing. Text is written as is:
//! LaTeX special characters in text leaves and titles are not escaped.

use log::warn;

use crate::error::{Error, Result};
use crate::model::{Entity, Report, Section, Text};

use super::Renderer;

/// Convert a report to a LaTeX document, failing on unsupported leaves.
pub fn to_latex(report: &Report) -> Result<String> {
    report.render_with(&LatexRenderer::default())
}

/// LaTeX renderer.
#[derive(Debug, Clone)]
pub struct LatexRenderer {
    ignore_unsupported: bool,
    document_class: String,
}

impl LatexRenderer {
    /// Create a LaTeX renderer.
    ///
    /// With `ignore_unsupported`, HTML and Markdown leaves contribute an
    /// empty string instead of failing the render.
    pub fn new(ignore_unsupported: bool) -> Self {
        Self {
            ignore_unsupported,
            document_class: "article".to_string(),
        }
    }

    /// Set the `\documentclass` used in the preamble.
    pub fn with_document_class(mut self, class: impl Into<String>) -> Self {
        self.document_class = class.into();
        self
    }

    /// Whether unsupported leaves are skipped.
    pub fn ignores_unsupported(&self) -> bool {
        self.ignore_unsupported
    }
}

impl Default for LatexRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Renderer for LatexRenderer {
    fn name(&self) -> &str {
        "latex"
    }

    fn render_report(&self, report: &Report) -> Result<String> {
        let body = self.body(Entity::Report(report))?;
        Ok(format!(
            "\\documentclass{{{class}}}
\\title{{{title}}}
\\begin{{document}}
\\maketitle
{body}
\\end{{document}}
",
            class = self.document_class,
            title = report.title,
            body = body
        ))
    }

    fn render_section(&self, section: &Section) -> Result<String> {
        let command = match section.level() {
            1 => "section",
            2 => "subsection",
            3 => "subsubsection",
            level => return Err(Error::unsupported_level(level, self.name())),
        };
        let body = self.body(Entity::Section(section))?;
        Ok(format!("\\{}{{{}}}\n{}", command, section.title, body))
    }

    fn render_text(&self, text: &Text) -> Result<String> {
        Ok(text.text.clone())
    }

    fn render_default(&self, entity: Entity<'_>) -> Result<String> {
        if self.ignore_unsupported {
            warn!("Skipping {} node: not representable in LaTeX", entity.kind());
            Ok(String::new())
        } else {
            Err(Error::unsupported_kind(entity.kind(), self.name()))
        }
    }
}
