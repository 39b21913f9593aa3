//! Divisor trait definition

/// Trait for splitting a key into the parts that label trie edges
///
/// Implementations must be deterministic for a fixed key. Each returned part
/// is owned by the caller, so nothing may borrow from the input key.
///
/// Any `Fn(&str) -> Option<Vec<String>>` is a divisor, so plain functions and
/// closures can be passed wherever a `Divisor` is expected.
pub trait Divisor: Send + Sync {
    /// Split `key` into ordered parts, or `None` if the key cannot be split
    fn divide(&self, key: &str) -> Option<Vec<String>>;

    /// Get a short identifier for log output
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Divisor for F
where
    F: Fn(&str) -> Option<Vec<String>> + Send + Sync,
{
    fn divide(&self, key: &str) -> Option<Vec<String>> {
        self(key)
    }
}
