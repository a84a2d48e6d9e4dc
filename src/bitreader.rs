use crate::error::{Error, Result};

/// Largest advancement a single read or skip may perform.
pub const MAX_ADVANCE_BITS: usize = 32;

/// A forward-only bit cursor over an RBSP buffer.
///
/// The buffer is borrowed, never copied or mutated; the only state is
/// the total number of bits consumed since the start. The cursor never
/// rewinds, and a failed call leaves the position untouched.
pub struct BitReader<'a> {
    buf: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new bitreader over `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, bit_pos: 0 }
    }

    /// Total bits consumed so far.
    pub fn bit_pos(&self) -> usize {
        self.bit_pos
    }

    /// Index of the byte currently being read.
    pub fn byte_pos(&self) -> usize {
        self.bit_pos / 8
    }

    /// Offset within the current byte, 0 being the most significant bit.
    pub fn bit_in_byte(&self) -> usize {
        self.bit_pos % 8
    }

    /// Whether the cursor sits on a byte boundary.
    pub fn is_byte_aligned(&self) -> bool {
        self.bit_pos % 8 == 0
    }

    /// Bits left between the cursor and the end of the buffer.
    pub fn remaining_bits(&self) -> usize {
        self.buf.len() * 8 - self.bit_pos
    }

    // Validates a single advancement and moves the cursor. Every read
    // and skip goes through here so the 32-bit per-call limit and the
    // buffer bound are enforced uniformly.
    fn advance(&mut self, count: usize) -> Result<()> {
        if count == 0 || count > MAX_ADVANCE_BITS {
            return Err(Error::InvalidArgument(format!(
                "advancement of {} bits outside 1..={}",
                count, MAX_ADVANCE_BITS
            )));
        }
        if count > self.remaining_bits() {
            return Err(Error::EndOfStream(format!(
                "{} bits requested, {} remaining",
                count,
                self.remaining_bits()
            )));
        }
        self.bit_pos += count;
        Ok(())
    }

    // The bit at absolute position `pos`, as 0 or 1. Callers bound
    // `pos` beforehand via advance().
    fn bit_at(&self, pos: usize) -> u8 {
        (self.buf[pos / 8] >> (7 - pos % 8)) & 1
    }

    /// Reads the byte at the current byte index and advances 8 bits.
    ///
    /// Meaningful to the caller only when the cursor is byte-aligned;
    /// the cursor itself does not enforce alignment here.
    pub fn read_byte(&mut self) -> Result<u8> {
        if self.byte_pos() >= self.buf.len() {
            return Err(Error::EndOfStream(format!(
                "no byte at index {}",
                self.byte_pos()
            )));
        }
        let byte = self.buf[self.byte_pos()];
        self.advance(8)?;
        Ok(byte)
    }

    /// Reads `count` bits (1 to 32) as individual bit values, most
    /// significant first. The read may span byte boundaries.
    ///
    /// Fails without advancing when fewer than `count` bits remain.
    pub fn read_bits(&mut self, count: usize) -> Result<Vec<u8>> {
        let start = self.bit_pos;
        self.advance(count)?;
        Ok((start..start + count).map(|pos| self.bit_at(pos)).collect())
    }

    /// Reads `count` bits (1 to 32) packed most-significant-first into
    /// a `u32`.
    pub fn u(&mut self, count: usize) -> Result<u32> {
        let start = self.bit_pos;
        self.advance(count)?;
        Ok((start..start + count)
            .fold(0, |acc, pos| (acc << 1) | u32::from(self.bit_at(pos))))
    }

    /// Reads the first `count` bits (1 to 8) of the current byte as
    /// boolean flags, advancing by `count` bits rather than the whole
    /// byte. The cursor must be byte-aligned.
    pub fn read_flags(&mut self, count: usize) -> Result<Vec<bool>> {
        if count == 0 || count > 8 {
            return Err(Error::InvalidArgument(format!(
                "{} flags outside 1..=8",
                count
            )));
        }
        if !self.is_byte_aligned() {
            return Err(Error::InvalidState(format!(
                "flags read at bit {} of a byte",
                self.bit_in_byte()
            )));
        }
        let start = self.bit_pos;
        self.advance(count)?;
        Ok((start..start + count)
            .map(|pos| self.bit_at(pos) == 1)
            .collect())
    }

    /// Advances one byte without reading.
    pub fn skip_byte(&mut self) -> Result<()> {
        self.advance(8)
    }

    /// Advances `count` bits (1 to 32) without reading.
    pub fn skip_bits(&mut self, count: usize) -> Result<()> {
        self.advance(count)
    }

    /// Consumes zero bits up to and including the terminating one bit,
    /// returning how many zeros preceded it.
    ///
    /// Bounded by the remaining buffer: an all-zero tail fails with
    /// `EndOfStream` instead of spinning.
    pub fn skip_leading_zeros(&mut self) -> Result<usize> {
        let mut zeros = 0;
        while self.bit_pos < self.buf.len() * 8 {
            let bit = self.bit_at(self.bit_pos);
            self.bit_pos += 1;
            if bit == 1 {
                return Ok(zeros);
            }
            zeros += 1;
        }
        Err(Error::EndOfStream(format!(
            "no terminating one bit after {} zeros",
            zeros
        )))
    }
}
