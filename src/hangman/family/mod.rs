//! Word families
//!
//! Partitioning a candidate set by reveal key and choosing the family to keep.

mod partition;
mod selector;

pub use partition::{Families, Family, partition};
pub use selector::{preferred_key, select_family};
