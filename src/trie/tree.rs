//! Trie engine: insertion, lookup and teardown

use super::{Entry, Node};
use crate::divisor::{CharDivisor, Divisor};
use crate::{Error, Result};
use log::{debug, trace, warn};
use std::fmt;

/// A trie mapping string keys to byte values
///
/// Keys are split into parts by the configured [`Divisor`]; each part labels
/// one edge. A key resolves to the node reached by following all of its
/// parts from the root, so a key whose parts are a prefix of another key's
/// parts gets its own entry on the shared path.
pub struct Trie {
    divisor: Box<dyn Divisor>,
    root: Node,
    /// Number of stored entries
    entries: usize,
    /// Number of nodes, root included
    nodes: usize,
}

impl Trie {
    /// Create an empty trie that splits keys per character
    pub fn new() -> Self {
        Self::with_divisor(CharDivisor)
    }

    /// Create an empty trie using `divisor` to split keys
    pub fn with_divisor(divisor: impl Divisor + 'static) -> Self {
        debug!("creating trie with {} divisor", divisor.name());
        Trie {
            divisor: Box::new(divisor),
            root: Node::root(),
            entries: 0,
            nodes: 1,
        }
    }

    /// Store a copy of `value` under `key`, replacing any previous value
    ///
    /// Either the whole insertion happens or none of it does: missing nodes
    /// are built off to the side and linked in one step, and the value is
    /// copied before anything is linked.
    pub fn put(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let parts = self.divide(key).ok_or_else(|| Error::DivisorFailed {
            key: key.to_string(),
        })?;
        let entry = Entry::copy_from(value)?;

        let mut parts = parts.into_iter();
        let mut node = &mut self.root;
        let mut missing = None;
        for part in parts.by_ref() {
            match node.child_index(&part) {
                Some(i) => node = &mut node.children[i],
                None => {
                    missing = Some(part);
                    break;
                }
            }
        }

        match missing {
            None => {
                if node.set_entry(entry).is_none() {
                    self.entries += 1;
                }
                trace!("put {:?}: {} bytes", key, value.len());
            }
            Some(first) => {
                let created = 1 + parts.len();
                node.attach(Node::path(first, parts, entry)?)?;
                self.nodes += created;
                self.entries += 1;
                trace!(
                    "put {:?}: {} bytes, {} new nodes",
                    key,
                    value.len(),
                    created
                );
            }
        }
        Ok(())
    }

    /// Get the value stored under `key`
    ///
    /// The returned slice borrows the trie, so it stays valid until the next
    /// mutation.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.get_entry(key).map(Entry::value)
    }

    /// Get the entry stored under `key`
    pub fn get_entry(&self, key: &str) -> Option<&Entry> {
        let parts = self.divide(key)?;
        let entry = self.find(&parts).and_then(Node::entry);
        trace!("get {:?}: {}", key, if entry.is_some() { "hit" } else { "miss" });
        entry
    }

    /// Check whether a value is stored under `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.get_entry(key).is_some()
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Check whether no values are stored
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes in the tree, root included
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Get the root node
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Get the name of the configured divisor
    pub fn divisor_name(&self) -> &str {
        self.divisor.name()
    }

    /// Release the trie and every node and value it owns
    ///
    /// Dropping the trie does the same; this only makes the teardown explicit
    /// at call sites.
    pub fn destroy(self) {
        drop(self);
    }

    // === Internal helpers ===

    fn divide(&self, key: &str) -> Option<Vec<String>> {
        let parts = self.divisor.divide(key);
        if parts.is_none() {
            warn!("{} divisor failed to split key {:?}", self.divisor.name(), key);
        }
        parts
    }

    fn find(&self, parts: &[String]) -> Option<&Node> {
        let mut node = &self.root;
        for part in parts {
            node = node.child(part)?;
        }
        Some(node)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Trie {
    fn drop(&mut self) {
        debug!(
            "destroying trie: {} nodes, {} entries",
            self.nodes, self.entries
        );
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("divisor", &self.divisor.name())
            .field("entries", &self.entries)
            .field("nodes", &self.nodes)
            .finish()
    }
}
