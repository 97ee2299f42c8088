//! Schema-tagged primitive encoder.

use recwire_buffers::Writer;

/// Schema-tagged primitive encoder.
pub struct TaggedEncoder {
    pub writer: Writer,
}

impl Default for TaggedEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TaggedEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn write_bool(&mut self, b: bool) {
        self.writer.u8(u8::from(b));
    }

    pub fn write_u8(&mut self, n: u8) {
        self.writer.u8(n);
    }

    pub fn write_u16(&mut self, n: u16) {
        self.writer.u16(n);
    }

    pub fn write_u32(&mut self, n: u32) {
        self.writer.u32(n);
    }

    pub fn write_u64(&mut self, n: u64) {
        self.writer.u64(n);
    }

    pub fn write_i8(&mut self, n: i8) {
        self.writer.i8(n);
    }

    pub fn write_i16(&mut self, n: i16) {
        self.writer.i16(n);
    }

    pub fn write_i32(&mut self, n: i32) {
        self.writer.i32(n);
    }

    pub fn write_i64(&mut self, n: i64) {
        self.writer.i64(n);
    }

    pub fn write_f32(&mut self, f: f32) {
        self.writer.f32(f);
    }

    pub fn write_f64(&mut self, f: f64) {
        self.writer.f64(f);
    }

    /// Writes a 4-byte little-endian length prefix.
    pub fn write_len(&mut self, len: u32) {
        self.writer.u32(len);
    }

    /// Writes a 1-byte union discriminant.
    pub fn write_discriminant(&mut self, index: u8) {
        self.writer.u8(index);
    }

    /// Writes a 1-byte optional presence tag (0 absent, 1 present).
    pub fn write_optional_tag(&mut self, present: bool) {
        self.writer.u8(u8::from(present));
    }
}
