//! Schema-tagged model-driven encoder.

use super::encoder::TaggedEncoder;
use crate::fixed::schema_encoder::model_kind;
use crate::model::{TypeModel, Value};

/// Ceiling on union variants representable by the 1-byte discriminant.
const MAX_VARIANTS: usize = 256;

/// Schema-tagged encoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaggedEncodeError {
    #[error("model/value type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    #[error("sequence length does not fit the wire length field")]
    UnrepresentableLength,
    #[error("fixed array length mismatch: declared {declared}, got {got}")]
    ArityMismatch { declared: usize, got: usize },
    #[error("required record field missing: {0}")]
    MissingField(String),
    #[error("union variant index out of range: {0}")]
    UnknownVariant(usize),
    #[error("union declares {0} variants; the 1-byte discriminant supports at most 256")]
    TooManyVariants(usize),
}

/// Schema-tagged model-driven encoder.
pub struct TaggedSchemaEncoder {
    encoder: TaggedEncoder,
}

impl Default for TaggedSchemaEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaggedSchemaEncoder {
    pub fn new() -> Self {
        Self {
            encoder: TaggedEncoder::new(),
        }
    }

    pub fn encode(
        &mut self,
        value: &Value,
        model: &TypeModel,
    ) -> Result<Vec<u8>, TaggedEncodeError> {
        self.write_value(value, model)?;
        Ok(self.encoder.writer.flush())
    }

    fn write_seq_len(&mut self, len: usize) -> Result<(), TaggedEncodeError> {
        let len = u32::try_from(len).map_err(|_| TaggedEncodeError::UnrepresentableLength)?;
        self.encoder.write_len(len);
        Ok(())
    }

    fn write_value(&mut self, value: &Value, model: &TypeModel) -> Result<(), TaggedEncodeError> {
        match (model, value) {
            (TypeModel::Bool, Value::Bool(b)) => {
                self.encoder.write_bool(*b);
                Ok(())
            }
            (TypeModel::U8, Value::U8(n)) => {
                self.encoder.write_u8(*n);
                Ok(())
            }
            (TypeModel::U16, Value::U16(n)) => {
                self.encoder.write_u16(*n);
                Ok(())
            }
            (TypeModel::U32, Value::U32(n)) => {
                self.encoder.write_u32(*n);
                Ok(())
            }
            (TypeModel::U64, Value::U64(n)) => {
                self.encoder.write_u64(*n);
                Ok(())
            }
            (TypeModel::I8, Value::I8(n)) => {
                self.encoder.write_i8(*n);
                Ok(())
            }
            (TypeModel::I16, Value::I16(n)) => {
                self.encoder.write_i16(*n);
                Ok(())
            }
            (TypeModel::I32, Value::I32(n)) => {
                self.encoder.write_i32(*n);
                Ok(())
            }
            (TypeModel::I64, Value::I64(n)) => {
                self.encoder.write_i64(*n);
                Ok(())
            }
            (TypeModel::F32, Value::F32(f)) => {
                self.encoder.write_f32(*f);
                Ok(())
            }
            (TypeModel::F64, Value::F64(f)) => {
                self.encoder.write_f64(*f);
                Ok(())
            }
            (TypeModel::Str, Value::Str(s)) => {
                self.write_seq_len(s.len())?;
                self.encoder.writer.utf8(s);
                Ok(())
            }
            (TypeModel::Bytes, Value::Bytes(b)) => {
                self.write_seq_len(b.len())?;
                self.encoder.writer.buf(b);
                Ok(())
            }
            (TypeModel::FixedArray { element, len }, Value::Array(arr)) => {
                if arr.len() != *len {
                    return Err(TaggedEncodeError::ArityMismatch {
                        declared: *len,
                        got: arr.len(),
                    });
                }
                for item in arr {
                    self.write_value(item, element)?;
                }
                Ok(())
            }
            (TypeModel::Sequence(element), Value::Array(arr)) => {
                self.write_seq_len(arr.len())?;
                for item in arr {
                    self.write_value(item, element)?;
                }
                Ok(())
            }
            (TypeModel::Optional(inner), Value::Optional(opt)) => match opt {
                Some(inner_value) => {
                    self.encoder.write_optional_tag(true);
                    self.write_value(inner_value, inner)
                }
                None => {
                    self.encoder.write_optional_tag(false);
                    Ok(())
                }
            },
            (TypeModel::Record(fields), Value::Record(pairs)) => {
                for (field_name, field_model) in fields {
                    let field_value = pairs
                        .iter()
                        .find(|(name, _)| name == field_name)
                        .map(|(_, v)| v)
                        .ok_or_else(|| TaggedEncodeError::MissingField(field_name.clone()))?;
                    self.write_value(field_value, field_model)?;
                }
                Ok(())
            }
            (TypeModel::TaggedUnion(variants), Value::Union { index, value }) => {
                if variants.len() > MAX_VARIANTS {
                    return Err(TaggedEncodeError::TooManyVariants(variants.len()));
                }
                let (_, payload_model) = variants
                    .get(*index)
                    .ok_or(TaggedEncodeError::UnknownVariant(*index))?;
                self.encoder.write_discriminant(*index as u8);
                self.write_value(value, payload_model)
            }
            (model, value) => Err(TaggedEncodeError::TypeMismatch {
                expected: model_kind(model),
                got: value.kind(),
            }),
        }
    }
}
