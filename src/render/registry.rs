//! Registry of renderers keyed by format name or file extension.
//!
//! # Example
//!
//! ```
//! use reportdom::render::RendererRegistry;
//! use reportdom::{Container, Report};
//!
//! fn main() -> reportdom::Result<()> {
//!     let registry = RendererRegistry::with_defaults();
//!
//!     let mut report = Report::new("Weekly");
//!     report.add_section("Summary", None);
//!
//!     let html = registry.render("htm", &report)?;
//!     assert!(html.contains("<h1>Summary</h1>"));
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::error::{Error, Result};
use crate::model::Report;

use super::{
    HtmlRenderer, JsonRenderer, LatexRenderer, MarkdownRenderer, Renderer, YamlRenderer,
};

/// Output formats with a built-in renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// HTML document
    #[default]
    Html,

    /// LaTeX document
    Latex,

    /// Markdown with YAML frontmatter
    Markdown,

    /// JSON dictionary export
    Json,

    /// YAML dictionary export
    Yaml,
}

impl OutputFormat {
    /// All built-in formats.
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Html,
        OutputFormat::Latex,
        OutputFormat::Markdown,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    /// Registry key of the format.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Latex => "latex",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Latex => "tex",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// MIME type of the output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html",
            OutputFormat::Latex => "application/x-latex",
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Json => "application/json",
            OutputFormat::Yaml => "application/yaml",
        }
    }
}

/// Registry mapping format names and extensions to renderers.
///
/// Aliases refer to another key by name, so replacing the renderer behind
/// `"latex"` also changes what `"tex"` resolves to.
pub struct RendererRegistry {
    renderers: HashMap<String, Arc<dyn Renderer>>,
    aliases: HashMap<String, String>,
}

impl RendererRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Create a registry with the built-in renderers.
    ///
    /// LaTeX output fails on HTML and Markdown leaves; register a
    /// `LatexRenderer::new(true)` to skip them instead.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlRenderer::new()));
        registry.register(Arc::new(LatexRenderer::default()));
        registry.register(Arc::new(MarkdownRenderer::new()));
        registry.register(Arc::new(JsonRenderer::default()));
        registry.register(Arc::new(YamlRenderer::default()));

        for format in OutputFormat::ALL {
            registry.alias(format.extension(), format.name());
        }
        registry.alias("htm", "html");
        registry.alias("yml", "yaml");
        registry
    }

    /// Register a renderer under its name, replacing any previous one.
    pub fn register(&mut self, renderer: Arc<dyn Renderer>) {
        let key = renderer.name().to_lowercase();
        self.register_as(key, renderer);
    }

    /// Register a renderer under an explicit key.
    pub fn register_as(&mut self, key: impl Into<String>, renderer: Arc<dyn Renderer>) {
        let key = key.into().to_lowercase();
        debug!("Registering {} renderer as '{}'", renderer.name(), key);
        self.aliases.remove(&key);
        self.renderers.insert(key, renderer);
    }

    /// Make `alias` resolve to whatever is registered as `target`.
    ///
    /// Returns false if nothing is registered as `target`.
    pub fn alias(&mut self, alias: &str, target: &str) -> bool {
        let target = target.to_lowercase();
        let target = self.resolve(&target).to_string();
        if !self.renderers.contains_key(&target) {
            return false;
        }
        let alias = alias.to_lowercase();
        if alias != target {
            self.renderers.remove(&alias);
            self.aliases.insert(alias, target);
        }
        true
    }

    /// Get a renderer by name or extension.
    pub fn get(&self, key: &str) -> Option<Arc<dyn Renderer>> {
        let key = key.to_lowercase();
        self.renderers.get(self.resolve(&key)).cloned()
    }

    fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.aliases.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Get the renderer for a built-in format.
    pub fn get_format(&self, format: OutputFormat) -> Option<Arc<dyn Renderer>> {
        self.get(format.name())
    }

    /// Check if a key is registered.
    pub fn supports(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get all registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .renderers
            .keys()
            .chain(self.aliases.keys())
            .map(|s| s.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Render a report with the renderer registered under `key`.
    pub fn render(&self, key: &str, report: &Report) -> Result<String> {
        let renderer = self
            .get(key)
            .ok_or_else(|| Error::UnknownFormat(key.to_string()))?;
        report.render_with(renderer.as_ref())
    }

    /// Render a report in the format implied by `path`'s extension.
    pub fn render_for_path(&self, path: &Path, report: &Report) -> Result<String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other(format!("File has no extension: {}", path.display())))?;
        self.render(ext, report)
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
