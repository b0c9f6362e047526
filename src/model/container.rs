//! Builder, traversal and lookup behaviour shared by reports and sections.
//!
//! Two chaining styles are available and they continue from different
//! objects:
//!
//! ```
//! use reportdom::{Container, Report};
//!
//! let mut report = Report::new("Chaining");
//!
//! // `section` returns the new section, so the Markdown leaf is its child.
//! report.section("Nested", None).add_markdown("inside *Nested*", None);
//!
//! // `add_section` returns the report, so the text leaf is a sibling.
//! report.add_section("Sibling", None).add_text("top level", None);
//!
//! assert_eq!(report.children().len(), 3);
//! assert_eq!(report.children()[0].children().len(), 1);
//! ```

use super::{Entity, Html, Markdown, Node, Section, Text};

mod private {
    use super::Node;

    /// Mutable access to the child list, kept out of the public API so
    /// that children can only be appended through the builder methods.
    pub trait Sealed {
        fn children_vec(&mut self) -> &mut Vec<Node>;

        /// Level given to sections created directly under this container.
        fn child_level(&self) -> u32;
    }
}

pub(crate) use private::Sealed;

/// A node that owns an ordered list of children: [`Report`](super::Report)
/// or [`Section`].
pub trait Container: private::Sealed {
    /// Get the children in insertion order.
    fn children(&self) -> &[Node];

    /// Get the identifier of this container.
    fn identifier(&self) -> Option<&str>;

    /// Borrow this container as an [`Entity`].
    fn as_entity(&self) -> Entity<'_>;

    /// Append a new section and return it.
    fn section(&mut self, title: impl Into<String>, identifier: Option<&str>) -> &mut Section
    where
        Self: Sized,
    {
        let mut section = Section::new(title, self.child_level());
        section.identifier = identifier.map(str::to_owned);
        match push_node(self.children_vec(), Node::Section(section)) {
            Node::Section(section) => section,
            _ => unreachable!("last child is the section just pushed"),
        }
    }

    /// Append an HTML leaf and return it.
    fn html(&mut self, content: impl Into<String>, identifier: Option<&str>) -> &mut Html
    where
        Self: Sized,
    {
        let mut html = Html::new(content);
        html.identifier = identifier.map(str::to_owned);
        match push_node(self.children_vec(), Node::Html(html)) {
            Node::Html(html) => html,
            _ => unreachable!("last child is the html leaf just pushed"),
        }
    }

    /// Append a text leaf and return it.
    fn text(&mut self, content: impl Into<String>, identifier: Option<&str>) -> &mut Text
    where
        Self: Sized,
    {
        let mut text = Text::new(content);
        text.identifier = identifier.map(str::to_owned);
        match push_node(self.children_vec(), Node::Text(text)) {
            Node::Text(text) => text,
            _ => unreachable!("last child is the text leaf just pushed"),
        }
    }

    /// Append a Markdown leaf and return it.
    fn markdown(&mut self, content: impl Into<String>, identifier: Option<&str>) -> &mut Markdown
    where
        Self: Sized,
    {
        let mut markdown = Markdown::new(content);
        markdown.identifier = identifier.map(str::to_owned);
        match push_node(self.children_vec(), Node::Markdown(markdown)) {
            Node::Markdown(markdown) => markdown,
            _ => unreachable!("last child is the markdown leaf just pushed"),
        }
    }

    /// Append a new section and return this container.
    fn add_section(&mut self, title: impl Into<String>, identifier: Option<&str>) -> &mut Self
    where
        Self: Sized,
    {
        self.section(title, identifier);
        self
    }

    /// Append an HTML leaf and return this container.
    fn add_html(&mut self, content: impl Into<String>, identifier: Option<&str>) -> &mut Self
    where
        Self: Sized,
    {
        self.html(content, identifier);
        self
    }

    /// Append a text leaf and return this container.
    fn add_text(&mut self, content: impl Into<String>, identifier: Option<&str>) -> &mut Self
    where
        Self: Sized,
    {
        self.text(content, identifier);
        self
    }

    /// Append a Markdown leaf and return this container.
    fn add_markdown(&mut self, content: impl Into<String>, identifier: Option<&str>) -> &mut Self
    where
        Self: Sized,
    {
        self.markdown(content, identifier);
        self
    }

    /// Iterate over this container and all its descendants, depth-first
    /// pre-order.
    fn entities(&self) -> Entities<'_> {
        Entities::new(self.as_entity())
    }

    /// Find the first entity whose identifier equals `identifier`.
    ///
    /// Nodes without identifier never match.
    fn lookup(&self, identifier: &str) -> Option<Entity<'_>> {
        self.entities()
            .find(|entity| entity.identifier() == Some(identifier))
    }

    /// Find the first direct child whose identifier equals `identifier`.
    ///
    /// Unlike [`lookup`](Container::lookup) this neither matches the
    /// container itself nor descends into sections.
    fn local(&self, identifier: &str) -> Option<Entity<'_>> {
        self.children()
            .iter()
            .map(Entity::from)
            .find(|entity| entity.identifier() == Some(identifier))
    }

    /// Find the first descendant section with the given identifier, for
    /// appending more content to it later.
    fn find_section_mut(&mut self, identifier: &str) -> Option<&mut Section> {
        find_section_in(self.children_vec(), identifier)
    }
}

fn push_node(children: &mut Vec<Node>, node: Node) -> &mut Node {
    children.push(node);
    let last = children.len() - 1;
    &mut children[last]
}

fn find_section_in<'a>(children: &'a mut [Node], identifier: &str) -> Option<&'a mut Section> {
    for node in children.iter_mut() {
        if let Node::Section(section) = node {
            if section.identifier.as_deref() == Some(identifier) {
                return Some(section);
            }
            if let Some(found) = find_section_in(section.children_vec(), identifier) {
                return Some(found);
            }
        }
    }
    None
}

/// Lazy depth-first pre-order iterator over a report tree.
///
/// Yields the starting entity first, then its children left to right,
/// each followed by its own descendants.
#[derive(Debug, Clone)]
pub struct Entities<'a> {
    stack: Vec<Entity<'a>>,
}

impl<'a> Entities<'a> {
    /// Start a traversal at `root`.
    pub fn new(root: Entity<'a>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Entities<'a> {
    type Item = Entity<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entity = self.stack.pop()?;
        self.stack
            .extend(entity.children().iter().rev().map(Entity::from));
        Some(entity)
    }
}
