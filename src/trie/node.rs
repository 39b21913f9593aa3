//! Trie node types

use crate::Result;

/// A value stored in the trie
///
/// The bytes are copied in on insertion and never interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    value: Vec<u8>,
}

impl Entry {
    /// Copy `value` into a freshly reserved buffer
    pub(crate) fn copy_from(value: &[u8]) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(value.len())?;
        buf.extend_from_slice(value);
        Ok(Entry { value: buf })
    }

    /// Get the stored bytes
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Length of the stored value in bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Check whether the stored value has zero length
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A vertex in the trie
///
/// Each node is labelled by the key part on the edge leading to it; the root
/// carries the empty label. Labels are unique among siblings and children
/// keep insertion order.
#[derive(Debug)]
pub struct Node {
    label: String,
    pub(crate) children: Vec<Node>,
    entry: Option<Entry>,
}

impl Node {
    /// Create the root node
    pub(crate) fn root() -> Self {
        Node::new(String::new())
    }

    pub(crate) fn new(label: String) -> Self {
        Node {
            label,
            children: Vec::new(),
            entry: None,
        }
    }

    /// Build a detached path of nodes labelled `first` then each of `rest`,
    /// with `entry` stored at the deepest one
    ///
    /// Nothing is linked into a tree here, so a failure drops the partial
    /// path and leaves the caller's tree untouched.
    pub(crate) fn path(
        first: String,
        rest: impl Iterator<Item = String>,
        entry: Entry,
    ) -> Result<Self> {
        let mut head = Node::new(first);
        let mut tail = &mut head;
        for label in rest {
            tail.children.try_reserve_exact(1)?;
            tail.children.push(Node::new(label));
            tail = &mut tail.children[0];
        }
        tail.entry = Some(entry);
        Ok(head)
    }

    /// Get the label on the edge leading to this node
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the entry stored at this node (if any)
    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    /// Find the child labelled `part`
    pub fn child(&self, part: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.label == part)
    }

    pub(crate) fn child_index(&self, part: &str) -> Option<usize> {
        self.children.iter().position(|c| c.label == part)
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Link `child` under this node, growing the child list fallibly
    pub(crate) fn attach(&mut self, child: Node) -> Result<()> {
        self.children.try_reserve(1)?;
        self.children.push(child);
        Ok(())
    }

    /// Store `entry` here, returning the one it replaces
    pub(crate) fn set_entry(&mut self, entry: Entry) -> Option<Entry> {
        self.entry.replace(entry)
    }
}

impl Drop for Node {
    // Children are released depth-first from an explicit stack so that very
    // deep paths cannot overflow the call stack.
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
