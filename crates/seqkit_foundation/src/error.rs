//! Error types for seqkit operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Only argument validation and seedless reduction raise errors; lookups that
//! can miss return `Option` instead.

use std::fmt;

use thiserror::Error;

/// The main error type for seqkit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
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
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Shorthand for attaching the name of the failing operation.
    #[must_use]
    pub fn in_operation(self, operation: &'static str) -> Self {
        let context = self.context.clone().unwrap_or_default();
        self.with_context(context.with_operation(operation))
    }

    /// Creates an error for a requested length below zero.
    #[must_use]
    pub fn negative_length(length: i64) -> Self {
        Self::new(ErrorKind::InvalidArgument(InvalidArgument::NegativeLength(
            length,
        )))
    }

    /// Creates an error for a requested length above the configured maximum.
    #[must_use]
    pub fn length_too_large(length: i64, max: usize) -> Self {
        Self::new(ErrorKind::InvalidArgument(InvalidArgument::LengthTooLarge {
            length,
            max,
        }))
    }

    /// Creates an error for an index outside `[-length, length)`.
    #[must_use]
    pub fn index_out_of_bounds(index: i64, length: usize) -> Self {
        Self::new(ErrorKind::InvalidArgument(
            InvalidArgument::IndexOutOfBounds { index, length },
        ))
    }

    /// Creates an error for reducing an empty sequence without a seed.
    #[must_use]
    pub fn empty_reduction() -> Self {
        Self::new(ErrorKind::EmptyReduction)
    }

    /// Returns true if this error rejected a caller-supplied argument.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    /// Returns true if this error came from a seedless reduction of nothing.
    #[must_use]
    pub const fn is_empty_reduction(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyReduction)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument was outside the range the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),

    /// Reduction of an empty sequence with no initial value.
    #[error("reduce of empty sequence with no initial value")]
    EmptyReduction,
}

/// The specific way an argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A sequence length below zero.
    NegativeLength(i64),
    /// A sequence length above the configured maximum.
    LengthTooLarge {
        /// The requested length.
        length: i64,
        /// The configured maximum.
        max: usize,
    },
    /// An index that does not address an existing element.
    IndexOutOfBounds {
        /// The index as supplied (may be negative).
        index: i64,
        /// The length of the sequence.
        length: usize,
    },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLength(length) => write!(f, "negative length {length}"),
            Self::LengthTooLarge { length, max } => {
                write!(f, "length {length} exceeds maximum {max}")
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds (length {length})")
            }
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the operation that failed.
    pub operation: Option<&'static str>,
    /// Name of the offending argument.
    pub argument: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Sets the argument name.
    #[must_use]
    pub fn with_argument(mut self, argument: &'static str) -> Self {
        self.argument = Some(argument);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
            if let Some(argument) = self.argument {
                write!(f, " (argument `{argument}`)")?;
            }
        } else if let Some(argument) = self.argument {
            write!(f, "argument `{argument}`")?;
        }
        Ok(())
    }
}
