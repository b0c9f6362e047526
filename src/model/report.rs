//! Report root node.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::container::Sealed;
use super::{Container, Entity, Node, ReportStats};
use crate::error::{Error, Result};

/// The root of a report tree.
///
/// # Example
///
/// ```
/// use reportdom::{Container, Report};
///
/// let mut report = Report::new("A report");
/// report
///     .section("Section 1", None)
///     .add_html("Hello <b>world</b>!", None)
///     .add_markdown("Hello **again**!", None);
///
/// assert_eq!(report.entities().count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report title
    pub title: String,

    /// Top-level children in insertion order
    #[serde(default)]
    children: Vec<Node>,
}

impl Report {
    /// Create an empty report.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Check if the report has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Collect node counts for the whole tree.
    pub fn stats(&self) -> ReportStats {
        ReportStats::collect(Entity::Report(self))
    }

    /// Parse a report from its JSON form (see [`Report::to_dict`]).
    ///
    /// Section levels are checked against nesting depth, since they are
    /// not derived when reading.
    pub fn from_json(json: &str) -> Result<Self> {
        let report: Report = serde_json::from_str(json)?;
        report.validate()?;
        debug!(
            "Parsed report '{}' with {} top-level nodes",
            report.title,
            report.children.len()
        );
        Ok(report)
    }

    /// Parse a report from a reader yielding JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let report: Report = serde_json::from_reader(reader)?;
        report.validate()?;
        debug!(
            "Read report '{}' with {} top-level nodes",
            report.title,
            report.children.len()
        );
        Ok(report)
    }

    /// Parse a report from its YAML form (see [`crate::render::to_yaml`]).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        let report: Report = serde_json::from_value(value)?;
        report.validate()?;
        debug!(
            "Parsed YAML report '{}' with {} top-level nodes",
            report.title,
            report.children.len()
        );
        Ok(report)
    }

    /// Parse a report from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading report from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Check that every section's level is its nesting depth.
    pub fn validate(&self) -> Result<()> {
        validate_levels(&self.children, 1)
    }
}

fn validate_levels(children: &[Node], expected: u32) -> Result<()> {
    for node in children {
        if let Node::Section(section) = node {
            if section.level() != expected {
                return Err(Error::InvalidStructure(format!(
                    "section '{}' has level {} but is nested at depth {}",
                    section.title,
                    section.level(),
                    expected
                )));
            }
            validate_levels(section.children(), expected + 1)?;
        }
    }
    Ok(())
}

impl Sealed for Report {
    fn children_vec(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    fn child_level(&self) -> u32 {
        1
    }
}

impl Container for Report {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn identifier(&self) -> Option<&str> {
        None
    }

    fn as_entity(&self) -> Entity<'_> {
        Entity::Report(self)
    }
}
