//! Collection utilities over seqkit sequences.
//!
//! Functions are grouped by category:
//! - `construct`: building sequences of a given length
//! - `transform`: pure operations returning new sequences or folded values
//! - `mutate`: in-place operations (take `&mut Sequence<T>`)
//! - `search`: quantifiers, membership, and lookups
//! - `sort`: stable in-place and copying sorts, comparator adapters
//! - `text`: joining sequences and splitting text
//!
//! Pure operations never modify their input. Lookups that can miss return
//! `Option`; only argument validation and seedless reduction return errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod construct;
mod index;
pub mod mutate;
pub mod search;
pub mod sort;
pub mod text;
pub mod transform;

pub use construct::{construct, construct_indexed, construct_with, construct_within};
pub use mutate::{
    append_many, prepend_one, remove_first, remove_last, reverse_in_place, splice_at,
};
pub use search::{
    at, every, find, find_index, find_last, find_last_index, includes, index_of, last_index_of,
    some,
};
pub use sort::{compare_as_text, sign_comparator, sort_in_place, sorted_copy};
pub use text::{join, split_text};
pub use transform::{
    concat, distinct, filter, map, reduce, reduce_right, reduce_right_unseeded, reduce_unseeded,
    reversed, slice, spliced, truthy, with_element,
};

pub use seqkit_foundation::{Error, ErrorKind, Limits, Result, Sequence, Value};
