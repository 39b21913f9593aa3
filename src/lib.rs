//! # divtrie
//!
//! An in-memory trie storing opaque byte values under string keys.
//!
//! Keys are not walked byte by byte. A pluggable [`Divisor`] splits each key
//! into an ordered sequence of parts, and every part labels one edge of the
//! tree. The default divisor yields one part per character; callers can
//! supply fixed-width chunks or any function of their own.
//!
//! ## Core Concepts
//!
//! - **Divisor**: maps a key to its parts (`&str -> Option<Vec<String>>`)
//! - **Node**: a vertex labelled by the part on its incoming edge
//! - **Entry**: the copied value blob attached to the node a key resolves to
//!
//! ## Example
//!
//! ```
//! use divtrie::{ChunkDivisor, Trie};
//!
//! let mut trie = Trie::with_divisor(ChunkDivisor::new(4)?);
//! trie.put("fstv", &888i32.to_ne_bytes())?;
//! assert_eq!(trie.get("fstv"), Some(&888i32.to_ne_bytes()[..]));
//! assert_eq!(trie.get("qwer"), None);
//! # Ok::<(), divtrie::Error>(())
//! ```
//!
//! The trie is a plain single-owner structure with no internal locking.
//! Callers sharing one across threads must hold an exclusive lock around
//! [`Trie::put`] and at least a shared lock around [`Trie::get`].

pub mod divisor;
pub mod trie;

mod error;

pub use divisor::{CharDivisor, ChunkDivisor, Divisor};
pub use error::{Error, Result};
pub use trie::{Entry, Node, Trie};
