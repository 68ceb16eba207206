// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LarderError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {source} (path: {path})")]
    Csv {
        source: csv::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Edges were requested for a key the graph does not hold.
    #[error("Node not found: {0}")]
    MissingNode(String),

    /// Edges were requested for an ingredient node.
    #[error("Node is not a recipe: {0}")]
    NotARecipe(String),

    /// A recipe title and an ingredient name would share one node key.
    #[error("Key already used by a node of another kind: {0}")]
    KeyConflict(String),

    #[error("Ingredient has no known price: {0}")]
    UnpricedIngredient(String),

    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LarderError>;

// Allow `?` on std::io::Error by converting to LarderError::Io with unknown path.
impl From<std::io::Error> for LarderError {
    fn from(source: std::io::Error) -> Self {
        LarderError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// CSV readers built over in-memory buffers carry no path.
impl From<csv::Error> for LarderError {
    fn from(source: csv::Error) -> Self {
        LarderError::Csv {
            source,
            path: PathBuf::from("<memory>"),
        }
    }
}

impl LarderError {
    /// Attaches a path to I/O and CSV errors that were raised without one.
    #[must_use]
    pub fn at(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io { source, .. } => Self::Io {
                source,
                path: path.into(),
            },
            Self::Csv { source, .. } => Self::Csv {
                source,
                path: path.into(),
            },
            other => other,
        }
    }
}
