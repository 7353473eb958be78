//! seqkit - Array idioms with explicit equality semantics
//!
//! This crate re-exports both layers of seqkit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: seqkit_stdlib     : Collection utilities (map, filter, splice, sort, ...)
//! Layer 0: seqkit_foundation : Core types (Sequence, Value, Record, Error)
//! ```

pub use seqkit_foundation as foundation;
pub use seqkit_stdlib as stdlib;
