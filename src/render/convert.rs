//! Markdown-to-HTML conversion used for Markdown leaves.
//!
//! The HTML renderer calls a [`MarkdownConverter`] for every Markdown leaf
//! and inserts its output unmodified. Any `Fn(&str) -> String` closure can
//! serve as a converter.

use std::sync::Arc;

use crate::error::Result;

use super::html::escape_html;

/// Converts Markdown source to HTML.
pub trait MarkdownConverter: Send + Sync {
    /// Convert `markup` to an HTML fragment.
    fn convert(&self, markup: &str) -> Result<String>;
}

impl<F> MarkdownConverter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn convert(&self, markup: &str) -> Result<String> {
        Ok(self(markup))
    }
}

/// CommonMark converter backed by `pulldown-cmark`.
#[cfg(feature = "cmark")]
#[derive(Debug, Clone, Copy)]
pub struct CmarkConverter {
    options: pulldown_cmark::Options,
}

#[cfg(feature = "cmark")]
impl CmarkConverter {
    /// Create a converter for plain CommonMark.
    pub fn new() -> Self {
        Self {
            options: pulldown_cmark::Options::empty(),
        }
    }

    /// Enable GitHub-style tables.
    pub fn with_tables(mut self) -> Self {
        self.options.insert(pulldown_cmark::Options::ENABLE_TABLES);
        self
    }

    /// Enable `~~strikethrough~~`.
    pub fn with_strikethrough(mut self) -> Self {
        self.options
            .insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
        self
    }
}

#[cfg(feature = "cmark")]
impl Default for CmarkConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "cmark")]
impl MarkdownConverter for CmarkConverter {
    fn convert(&self, markup: &str) -> Result<String> {
        let parser = pulldown_cmark::Parser::new_ext(markup, self.options);
        let mut output = String::with_capacity(markup.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut output, parser);
        Ok(output)
    }
}

/// Converter that shows the Markdown source as an escaped `<pre>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreformattedConverter;

impl MarkdownConverter for PreformattedConverter {
    fn convert(&self, markup: &str) -> Result<String> {
        Ok(format!("<pre>{}</pre>\n", escape_html(markup)))
    }
}

/// The converter used when none is configured: CommonMark when the `cmark`
/// feature is enabled, preformatted source otherwise.
pub fn default_converter() -> Arc<dyn MarkdownConverter> {
    #[cfg(feature = "cmark")]
    {
        Arc::new(CmarkConverter::new())
    }
    #[cfg(not(feature = "cmark"))]
    {
        Arc::new(PreformattedConverter)
    }
}
