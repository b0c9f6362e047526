//! Node counts and size statistics for a report tree.

use serde::{Deserialize, Serialize};

use super::{Entity, NodeKind};

/// Statistics collected over a report tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Number of report roots (0 when collected from a section)
    pub report_count: u32,

    /// Number of sections
    pub section_count: u32,

    /// Number of HTML leaves
    pub html_count: u32,

    /// Number of text leaves
    pub text_count: u32,

    /// Number of Markdown leaves
    pub markdown_count: u32,

    /// Deepest section level (0 when there are no sections)
    pub max_depth: u32,

    /// Approximate word count over titles and leaf content
    pub word_count: u32,
}

impl ReportStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the tree rooted at `root` and count everything in it.
    pub fn collect(root: Entity<'_>) -> Self {
        let mut stats = Self::new();
        for entity in root.entities() {
            match entity {
                Entity::Report(_) => stats.report_count += 1,
                Entity::Section(section) => {
                    stats.section_count += 1;
                    stats.max_depth = stats.max_depth.max(section.level());
                }
                Entity::Html(_) => stats.html_count += 1,
                Entity::Text(_) => stats.text_count += 1,
                Entity::Markdown(_) => stats.markdown_count += 1,
            }
            if let Some(title) = entity.title() {
                stats.count_text(title);
            }
            if let Some(content) = entity.content() {
                stats.count_text(content);
            }
        }
        stats
    }

    /// Number of leaves of any kind.
    pub fn leaf_count(&self) -> u32 {
        self.html_count + self.text_count + self.markdown_count
    }

    /// Number of nodes of the given kind.
    pub fn count_of(&self, kind: NodeKind) -> u32 {
        match kind {
            NodeKind::Report => self.report_count,
            NodeKind::Section => self.section_count,
            NodeKind::Html => self.html_count,
            NodeKind::Text => self.text_count,
            NodeKind::Markdown => self.markdown_count,
        }
    }

    /// Add word count from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, Report};

    #[test]
    fn test_collect_stats() {
        let mut report = Report::new("Quarterly numbers");
        report
            .section("Intro", None)
            .add_text("Two words", None)
            .section("Details", None)
            .add_html("<p>x</p>", None)
            .add_markdown("*y*", None);

        let stats = report.stats();
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.text_count, 1);
        assert_eq!(stats.html_count, 1);
        assert_eq!(stats.markdown_count, 1);
        assert_eq!(stats.leaf_count(), 3);
        assert_eq!(stats.max_depth, 2);
        // "Quarterly numbers" + "Intro" + "Two words" + "Details" + "<p>x</p>" + "*y*"
        assert_eq!(stats.word_count, 8);
    }

    #[test]
    fn test_count_of_report_root() {
        let mut report = Report::new("R");
        report.section("S", None).add_text("t", None);

        assert_eq!(report.stats().count_of(NodeKind::Report), 1);

        let section = report.children()[0].as_section().unwrap();
        let stats = ReportStats::collect(Entity::Section(section));
        assert_eq!(stats.count_of(NodeKind::Report), 0);
        assert_eq!(stats.count_of(NodeKind::Section), 1);
        assert_eq!(stats.count_of(NodeKind::Text), 1);
    }
}
