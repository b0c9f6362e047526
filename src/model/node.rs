//! Node sum type and the borrowed entity view used for traversal.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Container, Entities, Html, Markdown, Report, Section, Text};

/// The closed set of node kinds a report tree is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root report
    Report,
    /// Titled, leveled container
    Section,
    /// Raw HTML leaf
    Html,
    /// Plain text leaf
    Text,
    /// Markdown leaf
    Markdown,
}

impl NodeKind {
    /// Name of the kind, as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Report => "Report",
            NodeKind::Section => "Section",
            NodeKind::Html => "Html",
            NodeKind::Text => "Text",
            NodeKind::Markdown => "Markdown",
        }
    }

    /// Whether nodes of this kind have no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self, NodeKind::Html | NodeKind::Text | NodeKind::Markdown)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child of a report or section.
///
/// Like [`Section`], a `Node` deserialized on its own is not level-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A nested section
    Section(Section),
    /// Raw HTML content
    Html(Html),
    /// Plain text content
    Text(Text),
    /// Markdown content
    Markdown(Markdown),
}

impl Node {
    /// Get the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Section(_) => NodeKind::Section,
            Node::Html(_) => NodeKind::Html,
            Node::Text(_) => NodeKind::Text,
            Node::Markdown(_) => NodeKind::Markdown,
        }
    }

    /// Get the identifier of this node, if any.
    pub fn identifier(&self) -> Option<&str> {
        self.as_entity().identifier()
    }

    /// Get the children of this node (empty for leaves).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section(section) => section.children(),
            _ => &[],
        }
    }

    /// Borrow this node as an [`Entity`].
    pub fn as_entity(&self) -> Entity<'_> {
        Entity::from(self)
    }

    /// Get the section if this node is one.
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Node::Section(section) => Some(section),
            _ => None,
        }
    }

    /// Get the section mutably if this node is one.
    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Node::Section(section) => Some(section),
            _ => None,
        }
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

impl From<Html> for Node {
    fn from(html: Html) -> Self {
        Node::Html(html)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Markdown> for Node {
    fn from(markdown: Markdown) -> Self {
        Node::Markdown(markdown)
    }
}

/// Borrowed view of any node in a report tree, including the root.
///
/// This is what traversal yields, what lookup returns and what renderers
/// dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    /// The root report
    Report(&'a Report),
    /// A section
    Section(&'a Section),
    /// An HTML leaf
    Html(&'a Html),
    /// A text leaf
    Text(&'a Text),
    /// A Markdown leaf
    Markdown(&'a Markdown),
}

impl<'a> Entity<'a> {
    /// Get the kind of the underlying node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Entity::Report(_) => NodeKind::Report,
            Entity::Section(_) => NodeKind::Section,
            Entity::Html(_) => NodeKind::Html,
            Entity::Text(_) => NodeKind::Text,
            Entity::Markdown(_) => NodeKind::Markdown,
        }
    }

    /// Get the identifier of the underlying node. Reports never have one.
    pub fn identifier(&self) -> Option<&'a str> {
        match self {
            Entity::Report(_) => None,
            Entity::Section(section) => section.identifier.as_deref(),
            Entity::Html(html) => html.identifier.as_deref(),
            Entity::Text(text) => text.identifier.as_deref(),
            Entity::Markdown(markdown) => markdown.identifier.as_deref(),
        }
    }

    /// Get the title of a report or section.
    pub fn title(&self) -> Option<&'a str> {
        match self {
            Entity::Report(report) => Some(&report.title),
            Entity::Section(section) => Some(&section.title),
            _ => None,
        }
    }

    /// Get the content of a leaf.
    pub fn content(&self) -> Option<&'a str> {
        match self {
            Entity::Html(html) => Some(&html.html),
            Entity::Text(text) => Some(&text.text),
            Entity::Markdown(markdown) => Some(&markdown.markdown),
            _ => None,
        }
    }

    /// Get the children of the underlying node (empty for leaves).
    pub fn children(&self) -> &'a [Node] {
        match self {
            Entity::Report(report) => report.children(),
            Entity::Section(section) => section.children(),
            _ => &[],
        }
    }

    /// Depth-first pre-order traversal starting at this entity.
    pub fn entities(&self) -> Entities<'a> {
        Entities::new(*self)
    }
}

impl<'a> From<&'a Report> for Entity<'a> {
    fn from(report: &'a Report) -> Self {
        Entity::Report(report)
    }
}

impl<'a> From<&'a Section> for Entity<'a> {
    fn from(section: &'a Section) -> Self {
        Entity::Section(section)
    }
}

impl<'a> From<&'a Html> for Entity<'a> {
    fn from(html: &'a Html) -> Self {
        Entity::Html(html)
    }
}

impl<'a> From<&'a Text> for Entity<'a> {
    fn from(text: &'a Text) -> Self {
        Entity::Text(text)
    }
}

impl<'a> From<&'a Markdown> for Entity<'a> {
    fn from(markdown: &'a Markdown) -> Self {
        Entity::Markdown(markdown)
    }
}

impl<'a> From<&'a Node> for Entity<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Section(section) => Entity::Section(section),
            Node::Html(html) => Entity::Html(html),
            Node::Text(text) => Entity::Text(text),
            Node::Markdown(markdown) => Entity::Markdown(markdown),
        }
    }
}
