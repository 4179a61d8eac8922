//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Course or room records could not be turned into a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("course record {index}: {source}")]
    Course {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("room record {index}: {source}")]
    Room {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

/// An optimization run could not start or complete.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("catalog has no courses")]
    EmptyCatalog,

    #[error("invalid GA configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A solution references an ID the catalog does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("unknown course id '{0}'")]
    Course(String),

    #[error("unknown room id '{0}'")]
    Room(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
