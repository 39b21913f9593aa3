//! Fixed-width divisor

use super::Divisor;
use crate::{Error, Result};

/// Splits a key into chunks of `width` characters
///
/// The last chunk holds whatever is left and may be shorter.
#[derive(Clone, Copy, Debug)]
pub struct ChunkDivisor {
    width: usize,
}

impl ChunkDivisor {
    /// Create a divisor producing chunks of `width` characters
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidArgument(
                "chunk width must be at least 1".to_string(),
            ));
        }
        Ok(ChunkDivisor { width })
    }

    /// Get the chunk width
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Divisor for ChunkDivisor {
    fn divide(&self, key: &str) -> Option<Vec<String>> {
        let mut parts: Vec<String> = Vec::with_capacity(key.len().div_ceil(self.width));
        let mut chars = key.chars().peekable();
        while chars.peek().is_some() {
            parts.push(chars.by_ref().take(self.width).collect());
        }
        Some(parts)
    }

    fn name(&self) -> &str {
        "chunks"
    }
}
