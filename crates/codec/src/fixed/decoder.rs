//! Fixed-layout primitive decoder.

use recwire_buffers::{BufferError, Reader};

/// Fixed-layout decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixedDecodeError {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("invalid union discriminant: {0}")]
    InvalidDiscriminant(u32),
    #[error("invalid optional tag: {0}")]
    InvalidOptionalTag(u8),
    #[error("string bytes are not valid UTF-8")]
    InvalidUtf8,
}

impl From<BufferError> for FixedDecodeError {
    fn from(e: BufferError) -> Self {
        match e {
            BufferError::EndOfBuffer => FixedDecodeError::UnexpectedEndOfInput,
            BufferError::InvalidUtf8 => FixedDecodeError::InvalidUtf8,
        }
    }
}

/// Fixed-layout primitive decoder over a borrowed input buffer.
///
/// Never consumes more bytes than a construct requires; trailing input is
/// the caller's concern.
pub struct FixedDecoder<'a> {
    pub reader: Reader<'a>,
}

impl<'a> FixedDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(data),
        }
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.reader.position()
    }

    // ---------------------------------------------------------------- primitives

    pub fn read_bool(&mut self) -> Result<bool, FixedDecodeError> {
        Ok(self.reader.try_u8()? != 0)
    }

    pub fn read_u8(&mut self) -> Result<u8, FixedDecodeError> {
        Ok(self.reader.try_u8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16, FixedDecodeError> {
        Ok(self.reader.try_u16()?)
    }

    pub fn read_u32(&mut self) -> Result<u32, FixedDecodeError> {
        Ok(self.reader.try_u32()?)
    }

    pub fn read_u64(&mut self) -> Result<u64, FixedDecodeError> {
        Ok(self.reader.try_u64()?)
    }

    pub fn read_i8(&mut self) -> Result<i8, FixedDecodeError> {
        Ok(self.reader.try_i8()?)
    }

    pub fn read_i16(&mut self) -> Result<i16, FixedDecodeError> {
        Ok(self.reader.try_i16()?)
    }

    pub fn read_i32(&mut self) -> Result<i32, FixedDecodeError> {
        Ok(self.reader.try_i32()?)
    }

    pub fn read_i64(&mut self) -> Result<i64, FixedDecodeError> {
        Ok(self.reader.try_i64()?)
    }

    pub fn read_f32(&mut self) -> Result<f32, FixedDecodeError> {
        Ok(self.reader.try_f32()?)
    }

    pub fn read_f64(&mut self) -> Result<f64, FixedDecodeError> {
        Ok(self.reader.try_f64()?)
    }

    // ---------------------------------------------------------------- framing

    /// Reads an 8-byte little-endian length prefix.
    ///
    /// A length that cannot index memory exceeds the remaining input by
    /// definition, so it reports as end-of-input.
    pub fn read_len(&mut self) -> Result<usize, FixedDecodeError> {
        let len = self.reader.try_u64()?;
        usize::try_from(len).map_err(|_| FixedDecodeError::UnexpectedEndOfInput)
    }

    /// Reads a 4-byte little-endian union discriminant.
    pub fn read_discriminant(&mut self) -> Result<u32, FixedDecodeError> {
        Ok(self.reader.try_u32()?)
    }

    /// Reads a 1-byte optional presence tag; only 0 and 1 are valid.
    pub fn read_optional_tag(&mut self) -> Result<bool, FixedDecodeError> {
        match self.reader.try_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            n => Err(FixedDecodeError::InvalidOptionalTag(n)),
        }
    }

    /// Reads length-prefixed raw bytes.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, FixedDecodeError> {
        let len = self.read_len()?;
        Ok(self.reader.try_buf(len)?.to_vec())
    }

    /// Reads a length-prefixed UTF-8 string.
    pub fn read_str(&mut self) -> Result<String, FixedDecodeError> {
        let len = self.read_len()?;
        Ok(self.reader.try_utf8(len)?.to_string())
    }
}
