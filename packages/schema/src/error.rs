use std::path::PathBuf;
use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while discovering or parsing component schema files
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Components directory does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid component file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl SchemaError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
