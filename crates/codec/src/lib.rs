//! Deterministic wire codecs for structured records.
//!
//! Two sibling formats over one structural type model, plus a compact
//! variable-length encoding for u16 lengths:
//!
//! - [`fixed`] — fixed-layout format: little-endian fixed-width primitives,
//!   8-byte length prefixes, 4-byte union discriminants.
//! - [`tagged`] — schema-tagged format: 4-byte length prefixes, 1-byte
//!   union discriminants, boolean-tagged optionals.
//! - [`compact_len`] — 7-bit continuation encoding of u16 lengths.
//!
//! Encoding the same (model, value) pair always yields identical bytes;
//! codec calls share no mutable state.

pub mod compact_len;
pub mod fixed;
pub mod model;
pub mod tagged;

pub use compact_len::{decode_len, encode_len, CompactLenError};
pub use fixed::{
    FixedDecodeError, FixedDecoder, FixedEncoder, FixedEncodeError, FixedSchemaDecoder,
    FixedSchemaEncoder,
};
pub use model::{describe, ModelValidator, SchemaError, TypeModel, Value};
pub use tagged::{
    TaggedDecodeError, TaggedDecoder, TaggedEncoder, TaggedEncodeError, TaggedSchemaDecoder,
    TaggedSchemaEncoder,
};
