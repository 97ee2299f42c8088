//! Model-driven conversion of a vector's JSON value into a codec [`Value`].

use recwire_codec::model::{TypeModel, Value};
use serde_json::Value as Json;

/// Why a vector's JSON value cannot be realized under its model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("expected {expected}, got {got}")]
    Shape {
        expected: &'static str,
        got: &'static str,
    },
    #[error("number {0} out of range for {1}")]
    Range(String, &'static str),
    #[error("record field missing: {0}")]
    MissingField(String),
    #[error("unknown union variant: {0}")]
    UnknownVariant(String),
    #[error("union value must be a single-key object")]
    UnionShape,
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

fn shape(expected: &'static str, got: &Json) -> ValueError {
    ValueError::Shape {
        expected,
        got: json_kind(got),
    }
}

fn unsigned(json: &Json, kind: &'static str, max: u64) -> Result<u64, ValueError> {
    let n = json.as_u64().ok_or_else(|| shape(kind, json))?;
    if n > max {
        return Err(ValueError::Range(n.to_string(), kind));
    }
    Ok(n)
}

fn signed(json: &Json, kind: &'static str, min: i64, max: i64) -> Result<i64, ValueError> {
    let n = json.as_i64().ok_or_else(|| shape(kind, json))?;
    if n < min || n > max {
        return Err(ValueError::Range(n.to_string(), kind));
    }
    Ok(n)
}

/// Converts a JSON value to the [`Value`] a model describes.
///
/// Record fields are looked up by name (JSON key order does not matter);
/// unions are single-key objects keyed by variant name; `null` is the
/// absent optional.
pub fn json_to_value(model: &TypeModel, json: &Json) -> Result<Value, ValueError> {
    match model {
        TypeModel::Bool => json
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| shape("bool", json)),
        TypeModel::U8 => Ok(Value::U8(unsigned(json, "u8", u64::from(u8::MAX))? as u8)),
        TypeModel::U16 => Ok(Value::U16(unsigned(json, "u16", u64::from(u16::MAX))? as u16)),
        TypeModel::U32 => Ok(Value::U32(unsigned(json, "u32", u64::from(u32::MAX))? as u32)),
        TypeModel::U64 => Ok(Value::U64(unsigned(json, "u64", u64::MAX)?)),
        TypeModel::I8 => Ok(Value::I8(
            signed(json, "i8", i64::from(i8::MIN), i64::from(i8::MAX))? as i8,
        )),
        TypeModel::I16 => Ok(Value::I16(
            signed(json, "i16", i64::from(i16::MIN), i64::from(i16::MAX))? as i16,
        )),
        TypeModel::I32 => Ok(Value::I32(
            signed(json, "i32", i64::from(i32::MIN), i64::from(i32::MAX))? as i32,
        )),
        TypeModel::I64 => Ok(Value::I64(signed(json, "i64", i64::MIN, i64::MAX)?)),
        TypeModel::F32 => json
            .as_f64()
            .map(|f| Value::F32(f as f32))
            .ok_or_else(|| shape("f32", json)),
        TypeModel::F64 => json
            .as_f64()
            .map(Value::F64)
            .ok_or_else(|| shape("f64", json)),
        TypeModel::Str => json
            .as_str()
            .map(|s| Value::Str(s.to_string()))
            .ok_or_else(|| shape("string", json)),
        TypeModel::Bytes => {
            let arr = json.as_array().ok_or_else(|| shape("byte array", json))?;
            let mut bytes = Vec::with_capacity(arr.len());
            for item in arr {
                bytes.push(unsigned(item, "byte", u64::from(u8::MAX))? as u8);
            }
            Ok(Value::Bytes(bytes))
        }
        TypeModel::FixedArray { element, .. } | TypeModel::Sequence(element) => {
            let arr = json.as_array().ok_or_else(|| shape("array", json))?;
            let mut items = Vec::with_capacity(arr.len());
            for item in arr {
                items.push(json_to_value(element, item)?);
            }
            Ok(Value::Array(items))
        }
        TypeModel::Optional(inner) => {
            if json.is_null() {
                Ok(Value::Optional(None))
            } else {
                let value = json_to_value(inner, json)?;
                Ok(Value::Optional(Some(Box::new(value))))
            }
        }
        TypeModel::Record(fields) => {
            let obj = json.as_object().ok_or_else(|| shape("object", json))?;
            let mut pairs = Vec::with_capacity(fields.len());
            for (field_name, field_model) in fields {
                let field_json = obj
                    .get(field_name)
                    .ok_or_else(|| ValueError::MissingField(field_name.clone()))?;
                pairs.push((field_name.clone(), json_to_value(field_model, field_json)?));
            }
            Ok(Value::Record(pairs))
        }
        TypeModel::TaggedUnion(variants) => {
            let obj = json.as_object().ok_or_else(|| shape("object", json))?;
            let (variant_name, payload_json) = match (obj.len(), obj.iter().next()) {
                (1, Some(entry)) => entry,
                _ => return Err(ValueError::UnionShape),
            };
            let (index, (_, payload_model)) = variants
                .iter()
                .enumerate()
                .find(|(_, (name, _))| name == variant_name)
                .ok_or_else(|| ValueError::UnknownVariant(variant_name.clone()))?;
            let value = json_to_value(payload_model, payload_json)?;
            Ok(Value::Union {
                index,
                value: Box::new(value),
            })
        }
    }
}
