//! Fixed-layout record codec.
//!
//! Little-endian fixed-width primitives, 8-byte length prefixes, 4-byte
//! union discriminants, 0/1 optional tags. No implicit padding anywhere.

pub mod decoder;
pub mod encoder;
pub mod schema_decoder;
pub mod schema_encoder;

pub use decoder::{FixedDecodeError, FixedDecoder};
pub use encoder::FixedEncoder;
pub use schema_decoder::FixedSchemaDecoder;
pub use schema_encoder::{FixedEncodeError, FixedSchemaEncoder};
