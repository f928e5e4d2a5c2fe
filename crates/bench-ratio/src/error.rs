use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while deriving the ratio.
///
/// All of them are fatal for the current invocation.
#[derive(Debug, Error)]
pub enum RatioError {
    /// Input is not valid JSON.
    #[error("failed to parse {source_name}: {source}")]
    Parse {
        /// Which input failed to parse.
        source_name: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Input is valid JSON but violates a constraint.
    #[error("{0}")]
    Validation(String),
    /// A benchmark references an operation absent from the cost table.
    #[error("missing gas measurement for operation `{name}`")]
    Lookup {
        /// Name of the operation.
        name: String,
    },
    /// Reading an input or writing the generated file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path that was accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl RatioError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn parse(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
