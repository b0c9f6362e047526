//! The renderer protocol.
//!
//! [`Renderer::render`] dispatches on the kind of the entity it is given
//! and forwards to one hook per kind. Every hook falls back to
//! [`Renderer::render_default`], which rejects the node, so a renderer only
//! implements the kinds its format can express.
//!
//! # Example
//!
//! ```
//! use reportdom::model::{Container, Entity, Report, Section};
//! use reportdom::render::Renderer;
//!
//! /// Outline renderer: titles only, leaves are dropped.
//! struct Outline;
//!
//! impl Renderer for Outline {
//!     fn name(&self) -> &str {
//!         "outline"
//!     }
//!
//!     fn render_report(&self, report: &Report) -> reportdom::Result<String> {
//!         Ok(format!("{}\n{}", report.title, self.body(Entity::Report(report))?))
//!     }
//!
//!     fn render_section(&self, section: &Section) -> reportdom::Result<String> {
//!         let indent = "  ".repeat(section.level() as usize);
//!         let body = self.body(Entity::Section(section))?;
//!         Ok(format!("{}{}\n{}", indent, section.title, body))
//!     }
//!
//!     fn render_default(&self, _entity: Entity<'_>) -> reportdom::Result<String> {
//!         Ok(String::new())
//!     }
//! }
//!
//! let mut report = Report::new("Plan");
//! report.section("Goals", None).add_text("ignored", None);
//! assert_eq!(report.render_with(&Outline).unwrap(), "Plan\n  Goals\n");
//! ```

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::model::{Entity, Html, Markdown, Report, Section, Text};

/// Trait for output formats.
///
/// Implementations must be pure: rendering the same tree twice yields the
/// same output.
pub trait Renderer: Send + Sync {
    /// Get the name of this renderer, used in error messages.
    fn name(&self) -> &str;

    /// Render any entity by dispatching on its kind.
    fn render(&self, entity: Entity<'_>) -> Result<String> {
        trace!("{} renderer visiting {} node", self.name(), entity.kind());
        match entity {
            Entity::Report(report) => self.render_report(report),
            Entity::Section(section) => self.render_section(section),
            Entity::Html(html) => self.render_html(html),
            Entity::Text(text) => self.render_text(text),
            Entity::Markdown(markdown) => self.render_markdown(markdown),
        }
    }

    /// Render the root report.
    fn render_report(&self, report: &Report) -> Result<String> {
        self.render_default(Entity::Report(report))
    }

    /// Render a section.
    fn render_section(&self, section: &Section) -> Result<String> {
        self.render_default(Entity::Section(section))
    }

    /// Render an HTML leaf.
    fn render_html(&self, html: &Html) -> Result<String> {
        self.render_default(Entity::Html(html))
    }

    /// Render a text leaf.
    fn render_text(&self, text: &Text) -> Result<String> {
        self.render_default(Entity::Text(text))
    }

    /// Render a Markdown leaf.
    fn render_markdown(&self, markdown: &Markdown) -> Result<String> {
        self.render_default(Entity::Markdown(markdown))
    }

    /// Called for every kind the renderer does not handle.
    fn render_default(&self, entity: Entity<'_>) -> Result<String> {
        Err(Error::unsupported_kind(entity.kind(), self.name()))
    }

    /// Concatenate the rendered children of `entity`, in order.
    fn body(&self, entity: Entity<'_>) -> Result<String> {
        entity
            .children()
            .iter()
            .map(|child| self.render(Entity::from(child)))
            .collect()
    }
}

impl Report {
    /// Render the whole report with the given renderer.
    pub fn render_with(&self, renderer: &dyn Renderer) -> Result<String> {
        debug!(
            "Rendering report '{}' with {} renderer",
            self.title,
            renderer.name()
        );
        renderer.render(Entity::Report(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, NodeKind};

    struct TextOnly;

    impl Renderer for TextOnly {
        fn name(&self) -> &str {
            "text-only"
        }

        fn render_report(&self, report: &Report) -> Result<String> {
            self.body(Entity::Report(report))
        }

        fn render_text(&self, text: &Text) -> Result<String> {
            Ok(text.text.clone())
        }
    }

    #[test]
    fn test_body_concatenates_in_order() {
        let mut report = Report::new("R");
        report
            .add_text("a", None)
            .add_text("b", None)
            .add_text("c", None);

        assert_eq!(report.render_with(&TextOnly).unwrap(), "abc");
    }

    #[test]
    fn test_body_of_leaf_is_empty() {
        let text = Text::new("x");
        assert_eq!(TextOnly.body(Entity::Text(&text)).unwrap(), "");
    }

    #[test]
    fn test_unhandled_kind_falls_back_to_default() {
        let mut report = Report::new("R");
        report.add_text("fine", None).add_html("<p>not fine</p>", None);

        let err = report.render_with(&TextOnly).unwrap_err();
        match err {
            Error::UnsupportedNodeKind { kind, renderer } => {
                assert_eq!(kind, NodeKind::Html);
                assert_eq!(renderer, "text-only");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
