//! Document model types for report content.
//!
//! A [`Report`] is the root of a tree of [`Node`]s. Sections nest other
//! nodes; `Html`, `Text` and `Markdown` leaves hold content. The model is
//! format-agnostic: renderers in [`crate::render`] turn it into output.

mod container;
mod dict;
mod leaf;
mod node;
mod report;
mod section;
mod stats;

pub use container::{Container, Entities};
pub use dict::DictStyle;
pub use leaf::{Html, Markdown, Text};
pub use node::{Entity, Node, NodeKind};
pub use report::Report;
pub use section::Section;
pub use stats::ReportStats;
