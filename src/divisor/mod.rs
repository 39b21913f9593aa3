//! Pluggable key splitting

mod chars;
mod chunks;
mod traits;

pub use chars::CharDivisor;
pub use chunks::ChunkDivisor;
pub use traits::Divisor;
