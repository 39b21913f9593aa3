//! Default per-character divisor

use super::Divisor;

/// Splits a key into one part per character
///
/// This is the divisor a [`Trie`](crate::Trie) uses when none is supplied.
/// An empty key yields an empty part list, which addresses the root node.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharDivisor;

impl Divisor for CharDivisor {
    fn divide(&self, key: &str) -> Option<Vec<String>> {
        Some(key.chars().map(String::from).collect())
    }

    fn name(&self) -> &str {
        "chars"
    }
}
