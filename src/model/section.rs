//! Section node.

use serde::{Deserialize, Serialize};

use super::container::Sealed;
use super::{Container, Entity, Node};

/// A titled container whose heading depth is fixed at construction.
///
/// Sections are created through [`Container::section`] or
/// [`Container::add_section`], which set `level` to one more than the
/// parent's level (or 1 directly under a report).
///
/// Deserializing a `Section` on its own takes `level` as written. Only
/// [`Report::from_json`](super::Report::from_json) and the other `Report`
/// readers check levels against nesting depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: String,

    /// Heading depth, 1 for top-level sections
    level: u32,

    /// Optional identifier used by lookup
    #[serde(default)]
    pub identifier: Option<String>,

    /// Child nodes in insertion order
    #[serde(default)]
    children: Vec<Node>,
}

impl Section {
    /// Create a detached section at the given level (at least 1).
    pub fn new(title: impl Into<String>, level: u32) -> Self {
        Self {
            title: title.into(),
            level: level.max(1),
            identifier: None,
            children: Vec::new(),
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

    /// Get the heading level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Check if the section has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Sealed for Section {
    fn children_vec(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    fn child_level(&self) -> u32 {
        self.level + 1
    }
}

impl Container for Section {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    fn as_entity(&self) -> Entity<'_> {
        Entity::Section(self)
    }
}
