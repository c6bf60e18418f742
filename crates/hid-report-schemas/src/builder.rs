//! Fixed-size report buffer with bit-level field writes.

/// Writes bit fields into a zero-initialised report buffer.
///
/// Fields are packed LSB-first: bit `n` of the report lives in byte `n / 8`
/// at bit position `n % 8`. Multi-bit values are laid out little-endian.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBuilder {
    buffer: Vec<u8>,
}

impl ReportBuilder {
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0u8; len],
        }
    }

    /// Write `bit_len` bits of `value` starting at `bit_offset`.
    ///
    /// Negative values are stored in two's complement. Bits that fall outside
    /// the buffer are dropped; callers size the buffer from the schema.
    pub fn write_bits(&mut self, bit_offset: u16, bit_len: u8, value: i64) -> &mut Self {
        let modulus = 1i64 << bit_len;
        let raw = value.rem_euclid(modulus);
        for bit in 0..u16::from(bit_len) {
            let position = usize::from(bit_offset) + usize::from(bit);
            let mask = 1u8 << (position % 8);
            if let Some(byte) = self.buffer.get_mut(position / 8) {
                if (raw >> bit) & 1 == 1 {
                    *byte |= mask;
                } else {
                    *byte &= !mask;
                }
            }
        }
        self
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
