//! Export of report trees to nested key-value structures.
//!
//! The [`DictStyle::Rich`] form matches the serde representation of the
//! model, so it can be parsed back with [`Report::from_json`]. The
//! [`DictStyle::Simple`] form drops section levels and all identifiers and
//! is export-only.

use serde_json::{json, Value};

use super::{Container, Entity, Html, Markdown, Node, Report, Section, Text};

/// Shape of the dictionary produced by `to_dict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictStyle {
    /// Sections carry level and identifier, leaves carry identifier
    #[default]
    Rich,
    /// Sections carry title and children only, leaves map to bare content
    Simple,
}

impl Entity<'_> {
    /// Export this entity in the given style.
    pub fn to_dict_with(&self, style: DictStyle) -> Value {
        match (self, style) {
            (Entity::Report(report), _) => json!({
                "title": report.title,
                "children": children_dict(report.children(), style),
            }),
            (Entity::Section(section), DictStyle::Rich) => json!({
                "Section": {
                    "title": section.title,
                    "level": section.level(),
                    "identifier": section.identifier,
                    "children": children_dict(section.children(), style),
                }
            }),
            (Entity::Section(section), DictStyle::Simple) => json!({
                "Section": {
                    "title": section.title,
                    "children": children_dict(section.children(), style),
                }
            }),
            (Entity::Html(html), DictStyle::Rich) => json!({
                "Html": { "html": html.html, "identifier": html.identifier }
            }),
            (Entity::Text(text), DictStyle::Rich) => json!({
                "Text": { "text": text.text, "identifier": text.identifier }
            }),
            (Entity::Markdown(markdown), DictStyle::Rich) => json!({
                "Markdown": { "markdown": markdown.markdown, "identifier": markdown.identifier }
            }),
            (Entity::Html(html), DictStyle::Simple) => json!({ "Html": html.html }),
            (Entity::Text(text), DictStyle::Simple) => json!({ "Text": text.text }),
            (Entity::Markdown(markdown), DictStyle::Simple) => {
                json!({ "Markdown": markdown.markdown })
            }
        }
    }

    /// Export this entity in the rich style.
    pub fn to_dict(&self) -> Value {
        self.to_dict_with(DictStyle::Rich)
    }
}

fn children_dict(children: &[Node], style: DictStyle) -> Vec<Value> {
    children
        .iter()
        .map(|child| Entity::from(child).to_dict_with(style))
        .collect()
}

// Every node type gets the same pair of methods.

impl Report {
    /// Export the report as `{"title": ..., "children": [...]}`.
    pub fn to_dict(&self) -> Value {
        Entity::Report(self).to_dict()
    }

    /// Export the report without levels or identifiers.
    pub fn to_dict_simple(&self) -> Value {
        Entity::Report(self).to_dict_with(DictStyle::Simple)
    }
}

impl Node {
    /// Export the node as `{"<Kind>": ...}`.
    pub fn to_dict(&self) -> Value {
        self.as_entity().to_dict()
    }

    /// Export the node without levels or identifiers.
    pub fn to_dict_simple(&self) -> Value {
        self.as_entity().to_dict_with(DictStyle::Simple)
    }
}

impl Section {
    /// Export the section as `{"Section": {...}}`.
    pub fn to_dict(&self) -> Value {
        Entity::Section(self).to_dict()
    }

    /// Export the section as `{"Section": {"title", "children"}}`.
    pub fn to_dict_simple(&self) -> Value {
        Entity::Section(self).to_dict_with(DictStyle::Simple)
    }
}

impl Html {
    /// Export the leaf as `{"Html": {"html", "identifier"}}`.
    pub fn to_dict(&self) -> Value {
        Entity::Html(self).to_dict()
    }

    /// Export the leaf as `{"Html": content}`.
    pub fn to_dict_simple(&self) -> Value {
        Entity::Html(self).to_dict_with(DictStyle::Simple)
    }
}

impl Text {
    /// Export the leaf as `{"Text": {"text", "identifier"}}`.
    pub fn to_dict(&self) -> Value {
        Entity::Text(self).to_dict()
    }

    /// Export the leaf as `{"Text": content}`.
    pub fn to_dict_simple(&self) -> Value {
        Entity::Text(self).to_dict_with(DictStyle::Simple)
    }
}

impl Markdown {
    /// Export the leaf as `{"Markdown": {"markdown", "identifier"}}`.
    pub fn to_dict(&self) -> Value {
        Entity::Markdown(self).to_dict()
    }

    /// Export the leaf as `{"Markdown": content}`.
    pub fn to_dict_simple(&self) -> Value {
        Entity::Markdown(self).to_dict_with(DictStyle::Simple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new("A report");
        report
            .section("Section 1", Some("s1"))
            .add_html("Hello <b>world</b>!", None)
            .add_markdown("Hello **again**!", Some("md"));
        report
    }

    #[test]
    fn test_rich_dict_matches_serde() {
        let report = sample();
        let via_serde = serde_json::to_value(&report).unwrap();
        assert_eq!(report.to_dict(), via_serde);
    }

    #[test]
    fn test_simple_dict() {
        let report = sample();
        let expected = json!({
            "title": "A report",
            "children": [
                {"Section": {
                    "title": "Section 1",
                    "children": [
                        {"Html": "Hello <b>world</b>!"},
                        {"Markdown": "Hello **again**!"}
                    ]
                }}
            ]
        });
        assert_eq!(report.to_dict_simple(), expected);
    }

    #[test]
    fn test_leaf_rich_dict() {
        let text = Text::new("plain").with_identifier("t");
        assert_eq!(
            text.to_dict(),
            json!({"Text": {"text": "plain", "identifier": "t"}})
        );

        let html = Html::new("<br>");
        assert_eq!(
            html.to_dict(),
            json!({"Html": {"html": "<br>", "identifier": null}})
        );
    }

    #[test]
    fn test_section_rich_dict() {
        let section = Section::new("S", 2);
        assert_eq!(
            section.to_dict(),
            json!({"Section": {"title": "S", "level": 2, "identifier": null, "children": []}})
        );
    }
}
