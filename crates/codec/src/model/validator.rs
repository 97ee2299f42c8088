//! Structural validation of type models.

use super::types::TypeModel;

/// Why a type model is not constructible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("unrecognized type tag: {0}")]
    UnknownTag(String),
    #[error("tagged union declares no variants")]
    EmptyUnion,
    #[error("fixed array declares zero length")]
    ZeroLengthArray,
    #[error("duplicate record field name: {0}")]
    DuplicateField(String),
    #[error("duplicate union variant name: {0}")]
    DuplicateVariant(String),
}

/// Validates type models structurally.
///
/// Validation is codec-independent; per-codec limits (such as the tagged
/// format's 256-variant discriminant ceiling) are enforced by the codecs.
pub struct ModelValidator;

impl Default for ModelValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, model: &TypeModel) -> Result<(), SchemaError> {
        match model {
            TypeModel::Bool
            | TypeModel::U8
            | TypeModel::U16
            | TypeModel::U32
            | TypeModel::U64
            | TypeModel::I8
            | TypeModel::I16
            | TypeModel::I32
            | TypeModel::I64
            | TypeModel::F32
            | TypeModel::F64
            | TypeModel::Str
            | TypeModel::Bytes => Ok(()),
            TypeModel::FixedArray { element, len } => {
                if *len == 0 {
                    return Err(SchemaError::ZeroLengthArray);
                }
                self.validate(element)
            }
            TypeModel::Sequence(element) => self.validate(element),
            TypeModel::Optional(inner) => self.validate(inner),
            TypeModel::Record(fields) => self.validate_record(fields),
            TypeModel::TaggedUnion(variants) => self.validate_union(variants),
        }
    }

    fn validate_record(&self, fields: &[(String, TypeModel)]) -> Result<(), SchemaError> {
        let mut names: Vec<&str> = Vec::with_capacity(fields.len());
        for (name, field_model) in fields {
            if names.contains(&name.as_str()) {
                return Err(SchemaError::DuplicateField(name.clone()));
            }
            self.validate(field_model)?;
            names.push(name);
        }
        Ok(())
    }

    fn validate_union(&self, variants: &[(String, TypeModel)]) -> Result<(), SchemaError> {
        if variants.is_empty() {
            return Err(SchemaError::EmptyUnion);
        }
        let mut names: Vec<&str> = Vec::with_capacity(variants.len());
        for (name, payload) in variants {
            if names.contains(&name.as_str()) {
                return Err(SchemaError::DuplicateVariant(name.clone()));
            }
            self.validate(payload)?;
            names.push(name);
        }
        Ok(())
    }
}
