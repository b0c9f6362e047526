//! Leaf content nodes.

use serde::{Deserialize, Serialize};

/// Raw HTML content, emitted verbatim by the HTML renderer.
///
/// Well-formedness of the markup is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Html {
    /// Raw markup
    pub html: String,

    /// Optional identifier used by lookup
    #[serde(default)]
    pub identifier: Option<String>,
}

impl Html {
    /// Create an HTML leaf without identifier.
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            identifier: None,
        }
    }

    /// Set the identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the identifier in place, for use on a freshly appended leaf.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Get the identifier.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

/// Plain text content. Renderers escape it for their output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    /// Plain text
    pub text: String,

    /// Optional identifier used by lookup
    #[serde(default)]
    pub identifier: Option<String>,
}

impl Text {
    /// Create a text leaf without identifier.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            identifier: None,
        }
    }

    /// Set the identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the identifier in place.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Get the identifier.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

/// Markdown source, converted at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markdown {
    /// Markdown source
    pub markdown: String,

    /// Optional identifier used by lookup
    #[serde(default)]
    pub identifier: Option<String>,
}

impl Markdown {
    /// Create a Markdown leaf without identifier.
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            identifier: None,
        }
    }

    /// Set the identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set the identifier in place.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) -> &mut Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Get the identifier.
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}
