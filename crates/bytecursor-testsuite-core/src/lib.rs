//! Fixtures shared by the integration tests.

#[macro_use]
mod macros;

use bytecursor::{ByteCursor, Endianness};

/// Plain ASCII sentence used by most consumption tests.
pub const SENTENCE: &[u8] = b"where did you get your _____?";

/// Three words, each followed by a NUL byte.
pub const NUL_SEPARATED: &[u8] = b"what\0the\0who\0";

/// 255 in little-endian, -16777216 (signed) or 4278190080 (unsigned) in big-endian.
pub const FF_THEN_ZEROES: [u8; 4] = [0xff, 0x00, 0x00, 0x00];

/// Big-endian cursor over [`SENTENCE`].
pub fn sentence_cursor() -> ByteCursor {
    ByteCursor::from_bytes(SENTENCE)
}

/// Cursor over [`FF_THEN_ZEROES`] using the given default byte order.
pub fn ff_cursor(endianness: Endianness) -> ByteCursor {
    ByteCursor::with_endianness(FF_THEN_ZEROES, endianness)
}
