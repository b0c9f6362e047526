//! Rendering module for converting reports to various output formats.

mod convert;
mod html;
mod json;
mod latex;
mod markdown;
mod registry;
mod renderer;
mod yaml;

#[cfg(feature = "cmark")]
pub use convert::CmarkConverter;
pub use convert::{default_converter, MarkdownConverter, PreformattedConverter};
pub use html::{escape_html, to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat, JsonRenderer};
pub use latex::{to_latex, LatexRenderer};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use registry::{OutputFormat, RendererRegistry};
pub use renderer::Renderer;
pub use yaml::{to_yaml, YamlRenderer};
