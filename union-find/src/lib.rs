//! Disjoint-set forest over arbitrary hashable elements.
//!
//! [`DisjointSet`] keeps a partition of every element it has seen and merges
//! parts with union by rank and full path compression, so a sequence of `m`
//! operations over `n` elements costs `O(m·α(n))`.

pub mod error;
mod forest;
pub mod set;

pub use error::{Result, UnionFindError};
pub use set::DisjointSet;
