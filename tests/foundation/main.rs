//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Record, Sequence, Error, and element semantics.

mod errors;
mod sequences;
