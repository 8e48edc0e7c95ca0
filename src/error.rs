use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a render. All variants are fatal.
#[derive(Error, Debug)]
pub enum VizError {
    #[error("cannot read mapping plan {}: {source}", .path.display())]
    InputNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed mapping plan {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{operator} is missing config key '{key}'")]
    MissingField { operator: String, key: String },
    #[error("{operator} config key '{key}' must be {expected}")]
    InvalidField {
        operator: String,
        key: String,
        expected: &'static str,
    },
    #[error("graphviz render failed: {0}")]
    RenderFailure(String),
}

impl VizError {
    pub(crate) fn missing(operator: &str, key: &str) -> Self {
        VizError::MissingField {
            operator: operator.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn invalid(operator: &str, key: &str, expected: &'static str) -> Self {
        VizError::InvalidField {
            operator: operator.to_string(),
            key: key.to_string(),
            expected,
        }
    }
}
