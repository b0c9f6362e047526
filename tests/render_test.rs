//! Integration tests for the renderer protocol and the built-in renderers.

use std::sync::atomic::{AtomicUsize, Ordering};

use reportdom::model::Section;
use reportdom::render::PreformattedConverter;
use reportdom::{
    Container, Entity, Error, HtmlRenderer, LatexRenderer, MarkdownRenderer, NodeKind, Renderer,
    Report, Result, Text,
};

fn sample_report() -> Report {
    let mut report = Report::new("A report");
    report
        .section("Section 1", None)
        .add_html("Hello <b>world</b>!", None)
        .add_markdown("Hello **again**!", None);
    report
}

/// Renderer that counts how many nodes it visits.
struct CountingRenderer {
    visits: AtomicUsize,
}

impl CountingRenderer {
    fn new() -> Self {
        Self {
            visits: AtomicUsize::new(0),
        }
    }
}

impl Renderer for CountingRenderer {
    fn name(&self) -> &str {
        "counting"
    }

    fn render(&self, entity: Entity<'_>) -> Result<String> {
        self.visits.fetch_add(1, Ordering::SeqCst);
        let body = self.body(entity)?;
        Ok(format!("[{}{}]", entity.kind(), body))
    }
}

#[test]
fn test_end_to_end_html() {
    let report = sample_report();
    let html = report.render_with(&HtmlRenderer::new()).unwrap();

    assert!(html.contains("<h1>Section 1</h1>"));
    assert!(html.contains("Hello <b>world</b>!"));
    #[cfg(feature = "cmark")]
    assert!(html.contains("Hello <strong>again</strong>!"));
}

#[test]
fn test_title_once_in_head() {
    let mut report = Report::new("Unique Title");
    report.add_section("Other", None).add_text("body", None);

    let html = report.render_with(&HtmlRenderer::new()).unwrap();
    assert_eq!(html.matches("Unique Title").count(), 1);

    let head_start = html.find("<head>").unwrap();
    let head_end = html.find("</head>").unwrap();
    let title_at = html.find("Unique Title").unwrap();
    assert!(head_start < title_at && title_at < head_end);
}

#[test]
fn test_text_escaping_has_no_raw_reserved_chars() {
    let mut report = Report::new("R");
    report.add_text("if a < b && b > c\nthen <script>", Some("t"));

    let text = match report.lookup("t").unwrap() {
        Entity::Text(text) => text,
        other => panic!("expected text, got {:?}", other.kind()),
    };
    let rendered = HtmlRenderer::new().render_text(text).unwrap();
    let without_breaks = rendered.replace("<br/>", "");

    assert!(!without_breaks.contains('<'));
    assert!(!without_breaks.contains('>'));
    let stripped = without_breaks
        .replace("&amp;", "")
        .replace("&lt;", "")
        .replace("&gt;", "");
    assert!(!stripped.contains('&'));

    let unescaped = without_breaks
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    assert_eq!(unescaped, "if a < b && b > c\nthen <script>");
}

#[test]
fn test_rendering_is_idempotent() {
    let report = sample_report();
    let renderer = HtmlRenderer::new();
    let first = report.render_with(&renderer).unwrap();
    let second = report.render_with(&renderer).unwrap();
    assert_eq!(first, second);

    let latex = LatexRenderer::new(true);
    assert_eq!(
        report.render_with(&latex).unwrap(),
        report.render_with(&latex).unwrap()
    );
}

#[test]
fn test_child_order_preserved() {
    let mut report = Report::new("R");
    report
        .add_text("first", None)
        .add_text("second", None)
        .add_text("third", None);

    let html = report.render_with(&HtmlRenderer::new()).unwrap();
    let a = html.find("first").unwrap();
    let b = html.find("second").unwrap();
    let c = html.find("third").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_latex_unsupported_html_leaf() {
    let mut report = Report::new("R");
    report
        .section("S", None)
        .add_text("kept", None)
        .add_html("<p>dropped</p>", None);

    let err = report.render_with(&LatexRenderer::new(false)).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedNodeKind {
            kind: NodeKind::Html,
            ..
        }
    ));

    let latex = report.render_with(&LatexRenderer::new(true)).unwrap();
    assert!(latex.contains("\\section{S}\nkept"));
    assert!(!latex.contains("dropped"));
}

#[test]
fn test_latex_ignored_leaf_contributes_empty_string() {
    let mut section = Section::new("S", 1);
    section.add_html("<i>x</i>", None);

    let renderer = LatexRenderer::new(true);
    assert_eq!(
        renderer.render(Entity::Section(&section)).unwrap(),
        "\\section{S}\n"
    );
}

#[test]
fn test_latex_level_error_even_when_ignoring() {
    let mut report = Report::new("R");
    report
        .section("1", None)
        .section("2", None)
        .section("3", None)
        .section("4", None);

    let err = report.render_with(&LatexRenderer::new(true)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedLevel { level: 4, .. }));
}

#[test]
fn test_markdown_renderer_output() {
    let report = sample_report();
    let md = report.render_with(&MarkdownRenderer::new()).unwrap();
    assert!(md.starts_with("---\ntitle: \"A report\"\n---\n"));
    assert!(md.contains("# Section 1\n\nHello <b>world</b>!\n\nHello **again**!\n"));
}

#[test]
fn test_html_renderer_with_closure_converter() {
    let report = sample_report();
    let renderer = HtmlRenderer::new().with_converter(|md: &str| format!("<md>{}</md>", md));
    let html = report.render_with(&renderer).unwrap();
    assert!(html.contains("<md>Hello **again**!</md>"));
}

#[test]
fn test_html_renderer_with_preformatted_converter() {
    let report = sample_report();
    let renderer = HtmlRenderer::new().with_converter(PreformattedConverter);
    let html = report.render_with(&renderer).unwrap();
    assert!(html.contains("<pre>Hello **again**!</pre>"));
}

#[test]
fn test_custom_renderer_visits_every_node() {
    let report = sample_report();
    let renderer = CountingRenderer::new();
    let output = report.render_with(&renderer).unwrap();

    assert_eq!(renderer.visits.load(Ordering::SeqCst), 4);
    assert_eq!(output, "[Report[Section[Html][Markdown]]]");
}

#[test]
fn test_render_single_leaf() {
    let text = Text::new("a & b");
    let html = HtmlRenderer::new().render(Entity::Text(&text)).unwrap();
    assert_eq!(html, "a &amp; b");
}
