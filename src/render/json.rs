//! JSON rendering for reports.

use serde_json::Value;

use crate::error::Result;
use crate::model::{DictStyle, Entity, Html, Markdown, Report, Section, Text};

use super::Renderer;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON in the rich dictionary style.
pub fn to_json(report: &Report, format: JsonFormat) -> Result<String> {
    report.render_with(&JsonRenderer::new(format))
}

/// Renders any entity as the JSON text of its dictionary export.
///
/// Every node kind has a dictionary form, so each hook encodes its node
/// directly. [`Renderer::body`] yields a JSON array of the children.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    format: JsonFormat,
    style: DictStyle,
}

impl JsonRenderer {
    /// Create a JSON renderer with the rich dictionary style.
    pub fn new(format: JsonFormat) -> Self {
        Self {
            format,
            style: DictStyle::Rich,
        }
    }

    /// Set the dictionary style.
    pub fn with_style(mut self, style: DictStyle) -> Self {
        self.style = style;
        self
    }
}

impl JsonRenderer {
    fn encode(&self, value: &Value) -> Result<String> {
        let json = match self.format {
            JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
            JsonFormat::Compact => serde_json::to_string(value)?,
        };
        Ok(json)
    }
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, entity: Entity<'_>) -> Result<String> {
        self.encode(&entity.to_dict_with(self.style))
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
        self.encode(&Value::Array(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Container;

    #[test]
    fn test_to_json_pretty() {
        let mut report = Report::new("Test");
        report.add_text("Hello", None);

        let json = to_json(&report, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let mut report = Report::new("Test");
        report.add_section("S", None);

        let json = to_json(&report, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_json_renderer_parses_back() {
        let mut report = Report::new("Round trip");
        report
            .section("S", Some("s"))
            .add_markdown("_m_", Some("m"));

        let json = to_json(&report, JsonFormat::Compact).unwrap();
        assert_eq!(Report::from_json(&json).unwrap(), report);
    }

    #[test]
    fn test_simple_style_leaf() {
        let html = Html::new("<b>x</b>");
        let json = JsonRenderer::new(JsonFormat::Compact)
            .with_style(DictStyle::Simple)
            .render(Entity::Html(&html))
            .unwrap();
        assert_eq!(json, r#"{"Html":"<b>x</b>"}"#);
    }

    #[test]
    fn test_hooks_encode_their_node() {
        let renderer = JsonRenderer::new(JsonFormat::Compact);
        let text = Text::new("hi");
        let value: Value = serde_json::from_str(&renderer.render_text(&text).unwrap()).unwrap();
        assert_eq!(value, Entity::Text(&text).to_dict());

        let report = Report::new("R");
        assert_eq!(
            renderer.render_report(&report).unwrap(),
            renderer.render(Entity::Report(&report)).unwrap()
        );
    }

    #[test]
    fn test_body_is_json_array() {
        let mut report = Report::new("R");
        report.add_text("a", None).add_section("S", None);

        let body = JsonRenderer::new(JsonFormat::Compact)
            .body(Entity::Report(&report))
            .unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["Text"]["text"], "a");
    }
}
