use std::io;

use thiserror::Error;

use super::edit::EditKind;

#[derive(Debug, Clone, Hash, PartialEq, Eq, Error)]
pub enum Error {
    /// An edit operation whose `current`/`new` fields don't fit its kind.
    #[error("invalid {kind} edit at index {index}: {reason}")]
    InvalidEdit {
        /// Position of the operation in the edit script
        index: usize,
        kind: EditKind,
        reason: String,
    },
    /// The last token of an iteration-bound context is not an integer.
    #[error("cannot read an iteration bound from context {context:?}")]
    UnparseableIterationBound { context: String },
    /// A wire-form record that is neither 3 nor 4 elements long.
    #[error("malformed error record with {arity} elements, expected 3 or 4")]
    MalformedRecord { arity: usize },
    /// A wire-form record whose first element is a null.
    #[error("error record is missing its {0}")]
    MissingRecordField(&'static str),
    #[error("unknown error tag: {0}")]
    UnknownTag(String),
    #[error("unknown error label: {0}")]
    UnknownLabel(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
