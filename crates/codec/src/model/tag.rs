//! Type-tag parser: the textual grammar naming [`TypeModel`] nodes.
//!
//! Grammar:
//!
//! ```text
//! tag    := prim | "array(" tag "," n ")" | "seq(" tag ")" | "option(" tag ")"
//!         | "record(" field { "," field } ")" | "union(" field { "|" field } ")"
//! field  := name ":" tag
//! prim   := "bool" | "u8" | "u16" | "u32" | "u64"
//!         | "i8" | "i16" | "i32" | "i64" | "f32" | "f64" | "str" | "bytes"
//! ```
//!
//! Whitespace around punctuation is ignored.

use super::types::TypeModel;
use super::validator::{ModelValidator, SchemaError};

/// Resolves a type tag to a validated [`TypeModel`].
pub fn describe(tag: &str) -> Result<TypeModel, SchemaError> {
    let mut parser = TagParser::new(tag);
    let model = parser.parse_tag()?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(SchemaError::UnknownTag(format!(
            "trailing input at byte {}",
            parser.pos
        )));
    }
    ModelValidator::new().validate(&model)?;
    Ok(model)
}

struct TagParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TagParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.bump();
        }
    }

    fn expect(&mut self, c: u8) -> Result<(), SchemaError> {
        self.skip_ws();
        if self.peek() == Some(c) {
            self.bump();
            Ok(())
        } else {
            Err(SchemaError::UnknownTag(format!(
                "expected `{}` at byte {}",
                c as char, self.pos
            )))
        }
    }

    fn ident(&mut self) -> Result<&'a str, SchemaError> {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
            self.bump();
        }
        if self.pos == start {
            return Err(SchemaError::UnknownTag(format!(
                "expected a name at byte {}",
                self.pos
            )));
        }
        Ok(&self.input[start..self.pos])
    }

    fn number(&mut self) -> Result<usize, SchemaError> {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        self.input[start..self.pos]
            .parse()
            .map_err(|_| SchemaError::UnknownTag(format!("expected a length at byte {start}")))
    }

    fn parse_tag(&mut self) -> Result<TypeModel, SchemaError> {
        let name = self.ident()?;
        match name {
            "bool" => Ok(TypeModel::Bool),
            "u8" => Ok(TypeModel::U8),
            "u16" => Ok(TypeModel::U16),
            "u32" => Ok(TypeModel::U32),
            "u64" => Ok(TypeModel::U64),
            "i8" => Ok(TypeModel::I8),
            "i16" => Ok(TypeModel::I16),
            "i32" => Ok(TypeModel::I32),
            "i64" => Ok(TypeModel::I64),
            "f32" => Ok(TypeModel::F32),
            "f64" => Ok(TypeModel::F64),
            "str" => Ok(TypeModel::Str),
            "bytes" => Ok(TypeModel::Bytes),
            "array" => {
                self.expect(b'(')?;
                let element = Box::new(self.parse_tag()?);
                self.expect(b',')?;
                let len = self.number()?;
                self.expect(b')')?;
                Ok(TypeModel::FixedArray { element, len })
            }
            "seq" => {
                self.expect(b'(')?;
                let element = Box::new(self.parse_tag()?);
                self.expect(b')')?;
                Ok(TypeModel::Sequence(element))
            }
            "option" => {
                self.expect(b'(')?;
                let inner = Box::new(self.parse_tag()?);
                self.expect(b')')?;
                Ok(TypeModel::Optional(inner))
            }
            "record" => Ok(TypeModel::Record(self.parse_fields(b',')?)),
            "union" => Ok(TypeModel::TaggedUnion(self.parse_fields(b'|')?)),
            other => Err(SchemaError::UnknownTag(format!(
                "unknown type name `{other}`"
            ))),
        }
    }

    fn parse_fields(&mut self, sep: u8) -> Result<Vec<(String, TypeModel)>, SchemaError> {
        self.expect(b'(')?;
        let mut fields = Vec::new();
        self.skip_ws();
        if self.peek() == Some(b')') {
            self.bump();
            return Ok(fields);
        }
        loop {
            let name = self.ident()?.to_string();
            self.expect(b':')?;
            let model = self.parse_tag()?;
            fields.push((name, model));
            self.skip_ws();
            match self.peek() {
                Some(c) if c == sep => self.bump(),
                Some(b')') => {
                    self.bump();
                    return Ok(fields);
                }
                _ => {
                    return Err(SchemaError::UnknownTag(format!(
                        "expected `{}` or `)` at byte {}",
                        sep as char, self.pos
                    )))
                }
            }
        }
    }
}
