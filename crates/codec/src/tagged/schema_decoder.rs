//! Schema-tagged model-driven decoder.

use super::decoder::{TaggedDecodeError, TaggedDecoder};
use crate::model::{TypeModel, Value};

/// Cap on speculative preallocation for length-prefixed sequences; wire
/// lengths are untrusted input.
const SEQ_PREALLOC_CAP: usize = 4096;

/// Schema-tagged model-driven decoder.
///
/// Returns the decoded value together with the number of bytes consumed.
pub struct TaggedSchemaDecoder;

impl Default for TaggedSchemaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaggedSchemaDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(
        &self,
        data: &[u8],
        model: &TypeModel,
    ) -> Result<(Value, usize), TaggedDecodeError> {
        let mut decoder = TaggedDecoder::new(data);
        let value = self.read_value(&mut decoder, model)?;
        Ok((value, decoder.consumed()))
    }

    fn read_value(
        &self,
        decoder: &mut TaggedDecoder<'_>,
        model: &TypeModel,
    ) -> Result<Value, TaggedDecodeError> {
        match model {
            TypeModel::Bool => Ok(Value::Bool(decoder.read_bool()?)),
            TypeModel::U8 => Ok(Value::U8(decoder.read_u8()?)),
            TypeModel::U16 => Ok(Value::U16(decoder.read_u16()?)),
            TypeModel::U32 => Ok(Value::U32(decoder.read_u32()?)),
            TypeModel::U64 => Ok(Value::U64(decoder.read_u64()?)),
            TypeModel::I8 => Ok(Value::I8(decoder.read_i8()?)),
            TypeModel::I16 => Ok(Value::I16(decoder.read_i16()?)),
            TypeModel::I32 => Ok(Value::I32(decoder.read_i32()?)),
            TypeModel::I64 => Ok(Value::I64(decoder.read_i64()?)),
            TypeModel::F32 => Ok(Value::F32(decoder.read_f32()?)),
            TypeModel::F64 => Ok(Value::F64(decoder.read_f64()?)),
            TypeModel::Str => Ok(Value::Str(decoder.read_str()?)),
            TypeModel::Bytes => Ok(Value::Bytes(decoder.read_bytes()?)),
            TypeModel::FixedArray { element, len } => {
                let mut arr = Vec::with_capacity((*len).min(SEQ_PREALLOC_CAP));
                for _ in 0..*len {
                    arr.push(self.read_value(decoder, element)?);
                }
                Ok(Value::Array(arr))
            }
            TypeModel::Sequence(element) => {
                let len = decoder.read_len()?;
                let mut arr = Vec::with_capacity(len.min(SEQ_PREALLOC_CAP));
                for _ in 0..len {
                    arr.push(self.read_value(decoder, element)?);
                }
                Ok(Value::Array(arr))
            }
            TypeModel::Optional(inner) => {
                if decoder.read_optional_tag()? {
                    let value = self.read_value(decoder, inner)?;
                    Ok(Value::Optional(Some(Box::new(value))))
                } else {
                    Ok(Value::Optional(None))
                }
            }
            TypeModel::Record(fields) => {
                let mut pairs = Vec::with_capacity(fields.len());
                for (field_name, field_model) in fields {
                    let value = self.read_value(decoder, field_model)?;
                    pairs.push((field_name.clone(), value));
                }
                Ok(Value::Record(pairs))
            }
            TypeModel::TaggedUnion(variants) => {
                let discriminant = decoder.read_discriminant()?;
                let index = usize::from(discriminant);
                let (_, payload_model) = variants
                    .get(index)
                    .ok_or(TaggedDecodeError::InvalidDiscriminant(discriminant))?;
                let value = self.read_value(decoder, payload_model)?;
                Ok(Value::Union {
                    index,
                    value: Box::new(value),
                })
            }
        }
    }
}
