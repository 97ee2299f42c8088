//! Binary buffer writer with auto-growing capacity.

/// A binary buffer writer that grows automatically as needed.
///
/// Multi-byte integers and floats are written little-endian.
///
/// # Example
///
/// ```
/// use recwire_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x03, 0x02]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub bytes: Vec<u8>,
    /// Position where the last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with default allocation size (64KB).
    pub fn new() -> Self {
        Self::with_alloc_size(64 * 1024)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        let bytes = vec![0u8; alloc_size];
        Self {
            bytes,
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.bytes.len() - self.x;
        if remaining < capacity {
            let total = self.bytes.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.bytes[x0..x]);
        self.bytes = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.bytes[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.bytes[self.x] = val;
        self.x += 1;
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.u8(val as u8);
    }

    /// Writes an unsigned 16-bit integer (little-endian).
    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.ensure_capacity(2);
        self.bytes[self.x..self.x + 2].copy_from_slice(&val.to_le_bytes());
        self.x += 2;
    }

    /// Writes a signed 16-bit integer (little-endian).
    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.u16(val as u16);
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.ensure_capacity(4);
        self.bytes[self.x..self.x + 4].copy_from_slice(&val.to_le_bytes());
        self.x += 4;
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.u32(val as u32);
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.ensure_capacity(8);
        self.bytes[self.x..self.x + 8].copy_from_slice(&val.to_le_bytes());
        self.x += 8;
    }

    /// Writes a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.u64(val as u64);
    }

    /// Writes a 32-bit floating point number (IEEE-754, little-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.u32(val.to_bits());
    }

    /// Writes a 64-bit floating point number (IEEE-754, little-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.u64(val.to_bits());
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.bytes[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.buf(bytes);
        bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_u16_little_endian() {
        let mut writer = Writer::new();
        writer.u16(0x0102);
        assert_eq!(writer.flush(), [0x02, 0x01]);
    }

    #[test]
    fn test_u32_little_endian() {
        let mut writer = Writer::new();
        writer.u32(0x01020304);
        assert_eq!(writer.flush(), [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_u64_little_endian() {
        let mut writer = Writer::new();
        writer.u64(0x0102030405060708);
        assert_eq!(
            writer.flush(),
            [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
        );
    }

    #[test]
    fn test_i8_negative() {
        let mut writer = Writer::new();
        writer.i8(-2i8);
        assert_eq!(writer.flush(), [0xfe]);
    }

    #[test]
    fn test_i32_negative() {
        let mut writer = Writer::new();
        writer.i32(-2);
        assert_eq!(writer.flush(), [0xfe, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_f64_bits() {
        let mut writer = Writer::new();
        writer.f64(1.5);
        assert_eq!(writer.flush(), 1.5f64.to_le_bytes());
    }

    #[test]
    fn test_utf8() {
        let mut writer = Writer::new();
        let n = writer.utf8("hello");
        assert_eq!(n, 5);
        assert_eq!(writer.flush(), b"hello");
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_grow_past_alloc_size() {
        let mut writer = Writer::with_alloc_size(4);
        writer.buf(&[1, 2, 3]);
        writer.u32(0x01020304);
        assert_eq!(writer.flush(), [1, 2, 3, 0x04, 0x03, 0x02, 0x01]);
    }
}
