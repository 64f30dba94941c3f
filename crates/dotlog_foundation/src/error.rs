//! Error types for dotlog.
//!
//! Uses `thiserror` for ergonomic error definition. Every error here is
//! recoverable by design: introspection and formatting failures degrade to
//! warning output, they never abort an emission or alter a traced result.

use thiserror::Error;

/// Convenience alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for dotlog operations.
#[derive(Clone, Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a ragged-row error for a table whose row arity does not match
    /// its column count.
    #[must_use]
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::RaggedRow {
            row,
            expected,
            actual,
        })
    }

    /// Creates a type-resolution error for a runtime type name that could not
    /// be reduced to an enclosing type.
    #[must_use]
    pub fn type_resolution(raw: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeResolution { raw: raw.into() })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error)]
pub enum ErrorKind {
    /// A table row's cell count does not match the table's column count.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of columns the table declares.
        expected: usize,
        /// Number of cells the row actually has.
        actual: usize,
    },

    /// A captured runtime type name could not be reduced to an enclosing
    /// type (for example, a closure-mangled name).
    #[error("cannot resolve enclosing type from `{raw}`")]
    TypeResolution {
        /// The raw captured type name.
        raw: String,
    },
}
