//! # reportdom
//!
//! Document object model for building structured reports in code and
//! rendering them to HTML, LaTeX, Markdown, JSON, and YAML.
//!
//! ## Quick Start
//!
//! ```
//! use reportdom::{Container, HtmlRenderer, Report};
//!
//! fn main() -> reportdom::Result<()> {
//!     let mut report = Report::new("A report");
//!     report
//!         .section("Section 1", None)
//!         .add_html("Hello <b>world</b>!", None)
//!         .add_markdown("Hello **again**!", None);
//!
//!     let html = report.render_with(&HtmlRenderer::new())?;
//!     assert!(html.contains("<h1>Section 1</h1>"));
//!
//!     println!("{}", report.to_dict());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fluent construction**: `section`/`html`/`text`/`markdown` return the
//!   new child, `add_*` return the container
//! - **Lookup**: depth-first search by identifier
//! - **Pluggable renderers**: implement [`Renderer`] hooks for a new format
//! - **Dictionary export**: `to_dict` for JSON-style interchange, parsed
//!   back with [`Report::from_json`]
//!
//! A tree is borrowed immutably while it renders, so it cannot be modified
//! by the same owner mid-render. Sharing a tree across threads for mutation
//! needs external synchronization such as a `Mutex`.

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Container, DictStyle, Entities, Entity, Html, Markdown, Node, NodeKind, Report, ReportStats,
    Section, Text,
};
pub use render::{
    HtmlRenderer, JsonFormat, JsonRenderer, LatexRenderer, MarkdownConverter, MarkdownRenderer,
    OutputFormat, Renderer, RendererRegistry, YamlRenderer,
};

/// Render a report to HTML with the default Markdown converter.
///
/// # Example
///
/// ```
/// use reportdom::{to_html, Container, Report};
///
/// let mut report = Report::new("Status");
/// report.add_text("All systems <nominal>", None);
///
/// let html = to_html(&report).unwrap();
/// assert!(html.contains("All systems &lt;nominal&gt;"));
/// ```
pub fn to_html(report: &Report) -> Result<String> {
    render::to_html(report)
}

/// Render a report to LaTeX, failing on HTML and Markdown leaves.
pub fn to_latex(report: &Report) -> Result<String> {
    render::to_latex(report)
}

/// Render a report to Markdown.
pub fn to_markdown(report: &Report) -> Result<String> {
    render::to_markdown(report)
}

/// Render a report to JSON.
///
/// # Example
///
/// ```
/// use reportdom::{to_json, JsonFormat, Report};
///
/// let json = to_json(&Report::new("Empty"), JsonFormat::Compact).unwrap();
/// assert!(json.contains(r#""title":"Empty""#));
/// assert!(!json.contains('\n'));
/// ```
pub fn to_json(report: &Report, format: JsonFormat) -> Result<String> {
    render::to_json(report, format)
}

/// Render a report to YAML.
pub fn to_yaml(report: &Report) -> Result<String> {
    render::to_yaml(report)
}

/// Read a report from a JSON file and render it in the format implied by
/// `format` (a registry key such as `"html"` or `"tex"`).
pub fn render_file<P: AsRef<std::path::Path>>(path: P, format: &str) -> Result<String> {
    let report = Report::from_file(path)?;
    RendererRegistry::with_defaults().render(format, &report)
}
