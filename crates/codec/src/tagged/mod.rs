//! Schema-tagged record codec.
//!
//! Sibling of the fixed-layout format: same little-endian primitives, but
//! 4-byte length prefixes, 1-byte union discriminants (at most 256
//! variants), and boolean-tagged optionals. No 8-byte construct exists
//! anywhere in this format.

pub mod decoder;
pub mod encoder;
pub mod schema_decoder;
pub mod schema_encoder;

pub use decoder::{TaggedDecodeError, TaggedDecoder};
pub use encoder::TaggedEncoder;
pub use schema_decoder::TaggedSchemaDecoder;
pub use schema_encoder::{TaggedEncodeError, TaggedSchemaEncoder};
