//! Stateful byte-at-a-time UTF-8 decoder.
//!
//! Built for feeding arbitrary byte windows: the decoder carries an in-progress
//! multi-byte sequence across `feed` calls, so callers never have to align
//! their reads on character boundaries. Chunks produced by the splitter are
//! separator-aligned, so in practice every chunk starts and ends with the
//! decoder idle; `finish` asserts that.
//!
//! Policy on malformed input: reject, don't guess. Invalid lead bytes, stray
//! or missing continuation bytes, overlong encodings, surrogates, and values
//! above U+10FFFF all return a `DecodeError`. The caller decides the scope of
//! the failure (per chunk, in this crate).

use thiserror::Error;

/// Decoding failure for one byte window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte that cannot start a sequence (0xF8..=0xFF, or a bare
    /// continuation byte in lead position).
    #[error("invalid UTF-8 lead byte 0x{byte:02X} at offset {offset}")]
    InvalidLead {
        /// The offending byte value
        byte: u8,
        /// Byte offset within the window being decoded
        offset: usize,
    },

    /// A sequence byte without the 10xxxxxx continuation pattern.
    #[error("invalid UTF-8 continuation byte 0x{byte:02X} at offset {offset}")]
    InvalidContinuation {
        /// The offending byte value
        byte: u8,
        /// Byte offset within the window being decoded
        offset: usize,
    },

    /// A completed sequence that encodes its value in more bytes than needed.
    #[error("overlong UTF-8 encoding of U+{value:04X}")]
    Overlong {
        /// The decoded scalar value
        value: u32,
    },

    /// A completed sequence decoding to a surrogate or beyond U+10FFFF.
    #[error("UTF-8 sequence decodes to invalid scalar U+{value:04X}")]
    InvalidScalar {
        /// The decoded value
        value: u32,
    },

    /// Input ended while a multi-byte sequence was still open.
    #[error("truncated UTF-8 sequence: {missing} continuation byte(s) missing")]
    Truncated {
        /// Continuation bytes still expected at end of input
        missing: u8,
    },
}

/// Minimum scalar value representable by a sequence of the given total length.
/// Anything below it was encoded overlong.
const MIN_FOR_LEN: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// Byte-by-byte UTF-8 decoder carrying in-progress sequence state.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    /// Accumulator for the scalar value under construction
    acc: u32,
    /// Total byte length of the open sequence (0 when idle)
    seq_len: u8,
    /// Continuation bytes still expected
    need: u8,
    /// Bytes consumed so far, for error offsets
    pos: usize,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte. Returns `Ok(Some(cp))` when a code point completes,
    /// `Ok(None)` when the byte was absorbed into an open sequence.
    #[inline]
    pub fn feed(&mut self, byte: u8) -> Result<Option<u32>, DecodeError> {
        let offset = self.pos;
        self.pos += 1;

        if self.need > 0 {
            if byte & 0xC0 != 0x80 {
                return Err(DecodeError::InvalidContinuation { byte, offset });
            }
            self.acc = (self.acc << 6) | u32::from(byte & 0x3F);
            self.need -= 1;
            if self.need > 0 {
                return Ok(None);
            }
            let value = self.acc;
            let seq_len = self.seq_len;
            self.seq_len = 0;
            if value < MIN_FOR_LEN[seq_len as usize] {
                return Err(DecodeError::Overlong { value });
            }
            if (0xD800..=0xDFFF).contains(&value) || value > 0x10_FFFF {
                return Err(DecodeError::InvalidScalar { value });
            }
            return Ok(Some(value));
        }

        // High bit clear: complete single-byte code point
        if byte & 0x80 == 0 {
            return Ok(Some(u32::from(byte)));
        }

        // Lead byte: the count of set bits before the first clear bit gives
        // the sequence length; the remaining low bits seed the accumulator.
        let (seq_len, mask) = match byte {
            0xC0..=0xDF => (2u8, 0x1F),
            0xE0..=0xEF => (3u8, 0x0F),
            0xF0..=0xF7 => (4u8, 0x07),
            _ => return Err(DecodeError::InvalidLead { byte, offset }),
        };
        self.acc = u32::from(byte & mask);
        self.seq_len = seq_len;
        self.need = seq_len - 1;
        Ok(None)
    }

    /// True when no multi-byte sequence is open.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.need == 0
    }

    /// Assert end of input. Errors if a sequence is still open (the input was
    /// truncated mid-character).
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.need > 0 {
            return Err(DecodeError::Truncated { missing: self.need });
        }
        Ok(())
    }
}
