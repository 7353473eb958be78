//! Core sequence, value, and equality types for seqkit.
//!
//! This crate provides:
//! - [`Sequence`] - Ordered collection with copy and in-place operations
//! - [`Value`] - Dynamic element type with reference identity for composites
//! - [`Record`] - Named-field mapping used as a structured element
//! - [`SameValue`], [`StrictEquality`], [`Truthiness`], [`TextForm`] - Element semantics
//! - [`Limits`] - Configurable bounds on sequence construction
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod equality;
pub mod error;
pub mod limits;
pub mod record;
pub mod sequence;
pub mod value;

pub use coerce::{TextForm, Truthiness, format_number};
pub use equality::{SameValue, SameValueKey, StrictEquality};
pub use error::{Error, ErrorContext, ErrorKind, InvalidArgument};
pub use limits::Limits;
pub use record::Record;
pub use sequence::Sequence;
pub use value::Value;

/// Result type alias using seqkit's Error type.
pub type Result<T> = std::result::Result<T, Error>;
