//! YAML rendering for reports.

use serde_json::Value;

use crate::error::Result;
use crate::model::{DictStyle, Entity, Html, Markdown, Report, Section, Text};

use super::Renderer;

/// Convert a report to YAML in the rich dictionary style.
pub fn to_yaml(report: &Report) -> Result<String> {
    report.render_with(&YamlRenderer::new())
}

/// Renders any entity as the YAML text of its dictionary export.
///
/// The output uses plain single-key maps for node kinds, the same shape as
/// the JSON export, and is read back by [`Report::from_yaml`].
#[derive(Debug, Clone, Default)]
pub struct YamlRenderer {
    style: DictStyle,
}

impl YamlRenderer {
    /// Create a YAML renderer with the rich dictionary style.
    pub fn new() -> Self {
        Self {
            style: DictStyle::Rich,
        }
    }

    /// Set the dictionary style.
    pub fn with_style(mut self, style: DictStyle) -> Self {
        self.style = style;
        self
    }
}

impl Renderer for YamlRenderer {
    fn name(&self) -> &str {
        "yaml"
    }

    fn render(&self, entity: Entity<'_>) -> Result<String> {
        Ok(serde_yaml::to_string(&entity.to_dict_with(self.style))?)
    }

    fn render_report(&self, report: &Report) -> Result<String> {
        self.render(Entity::Report(report))
    }

    fn render_section(&self, section: &Section) -> Result<String> {
        self.render(Entity::Section(section))
    }

    fn render_html(&self, html: &Html) -> Result<String> {
        self.render(Entity::Html(html))
    }

    fn render_text(&self, text: &Text) -> Result<String> {
        self.render(Entity::Text(text))
    }

    fn render_markdown(&self, markdown: &Markdown) -> Result<String> {
        self.render(Entity::Markdown(markdown))
    }

    fn body(&self, entity: Entity<'_>) -> Result<String> {
        let children: Vec<Value> = entity
            .children()
            .iter()
            .map(|child| Entity::from(child).to_dict_with(self.style))
            .collect();
        Ok(serde_yaml::to_string(&children)?)
    }
}
