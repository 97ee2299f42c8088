//! Byte-buffer primitives shared by the recwire codecs.
//!
//! Both wire formats are little-endian, so every multi-byte accessor here
//! is little-endian.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Errors produced by bounds-checked buffer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("invalid UTF-8")]
    InvalidUtf8,
}
