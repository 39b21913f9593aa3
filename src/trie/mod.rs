//! Part-labelled trie
//!
//! A tree of exclusively owned nodes where:
//! - Each edge is labelled by one part produced by the divisor
//! - Sibling labels are unique; children keep insertion order
//! - A value lives at the node its key's final part leads to

mod node;
mod tree;

pub use node::{Entry, Node};
pub use tree::Trie;
