//! Error types for reportdom library.

use std::io;
use thiserror::Error;

use crate::model::NodeKind;

/// Result type alias for reportdom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, rendering or serializing reports.
#[derive(Error, Debug)]
pub enum Error {
    /// A renderer was given a node kind it cannot represent.
    #[error("{renderer} renderer does not support {kind} nodes")]
    UnsupportedNodeKind {
        /// Kind of the offending node
        kind: NodeKind,
        /// Name of the renderer
        renderer: String,
    },

    /// A section is nested deeper than the output format can express.
    #[error("{renderer} renderer does not support section level {level}")]
    UnsupportedLevel {
        /// Level of the offending section
        level: u32,
        /// Name of the renderer
        renderer: String,
    },

    /// The Markdown converter failed.
    #[error("Markdown conversion error: {0}")]
    Markdown(String),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML encoding or decoding error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A deserialized tree breaks a structural invariant.
    #[error("Invalid report structure: {0}")]
    InvalidStructure(String),

    /// No renderer is registered for the requested format.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for an [`Error::UnsupportedNodeKind`].
    pub fn unsupported_kind(kind: NodeKind, renderer: impl Into<String>) -> Self {
        Error::UnsupportedNodeKind {
            kind,
            renderer: renderer.into(),
        }
    }

    /// Shorthand for an [`Error::UnsupportedLevel`].
    pub fn unsupported_level(level: u32, renderer: impl Into<String>) -> Self {
        Error::UnsupportedLevel {
            level,
            renderer: renderer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported_kind(NodeKind::Html, "latex");
        assert_eq!(err.to_string(), "latex renderer does not support Html nodes");

        let err = Error::unsupported_level(4, "latex");
        assert_eq!(
            err.to_string(),
            "latex renderer does not support section level 4"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
