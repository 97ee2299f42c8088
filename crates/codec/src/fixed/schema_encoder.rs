//! Fixed-layout model-driven encoder.

use super::encoder::FixedEncoder;
use crate::model::{TypeModel, Value};

/// Fixed-layout encoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixedEncodeError {
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
}

/// Fixed-layout model-driven encoder.
///
/// Walks a [`TypeModel`] and a conforming [`Value`] together, emitting the
/// value's wire bytes. Encoding is deterministic: the same (model, value)
/// pair always yields identical output.
pub struct FixedSchemaEncoder {
    encoder: FixedEncoder,
}

impl Default for FixedSchemaEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedSchemaEncoder {
    pub fn new() -> Self {
        Self {
            encoder: FixedEncoder::new(),
        }
    }

    pub fn encode(
        &mut self,
        value: &Value,
        model: &TypeModel,
    ) -> Result<Vec<u8>, FixedEncodeError> {
        self.write_value(value, model)?;
        Ok(self.encoder.writer.flush())
    }

    fn write_seq_len(&mut self, len: usize) -> Result<(), FixedEncodeError> {
        let len = u64::try_from(len).map_err(|_| FixedEncodeError::UnrepresentableLength)?;
        self.encoder.write_len(len);
        Ok(())
    }

    fn write_value(&mut self, value: &Value, model: &TypeModel) -> Result<(), FixedEncodeError> {
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
                    return Err(FixedEncodeError::ArityMismatch {
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
                        .ok_or_else(|| FixedEncodeError::MissingField(field_name.clone()))?;
                    self.write_value(field_value, field_model)?;
                }
                Ok(())
            }
            (TypeModel::TaggedUnion(variants), Value::Union { index, value }) => {
                let (_, payload_model) = variants
                    .get(*index)
                    .ok_or(FixedEncodeError::UnknownVariant(*index))?;
                let discriminant =
                    u32::try_from(*index).map_err(|_| FixedEncodeError::UnknownVariant(*index))?;
                self.encoder.write_discriminant(discriminant);
                self.write_value(value, payload_model)
            }
            (model, value) => Err(FixedEncodeError::TypeMismatch {
                expected: model_kind(model),
                got: value.kind(),
            }),
        }
    }
}

pub(crate) fn model_kind(model: &TypeModel) -> &'static str {
    match model {
        TypeModel::Bool => "bool",
        TypeModel::U8 => "u8",
        TypeModel::U16 => "u16",
        TypeModel::U32 => "u32",
        TypeModel::U64 => "u64",
        TypeModel::I8 => "i8",
        TypeModel::I16 => "i16",
        TypeModel::I32 => "i32",
        TypeModel::I64 => "i64",
        TypeModel::F32 => "f32",
        TypeModel::F64 => "f64",
        TypeModel::Str => "str",
        TypeModel::Bytes => "bytes",
        TypeModel::FixedArray { .. } => "array",
        TypeModel::Sequence(_) => "seq",
        TypeModel::Optional(_) => "option",
        TypeModel::Record(_) => "record",
        TypeModel::TaggedUnion(_) => "union",
    }
}
