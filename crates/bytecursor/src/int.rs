use crate::{CursorResult, Endianness};

/// Widths accepted for integer decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// `i8` / `u8`
    One,
    /// `i16` / `u16`
    Two,
    /// `i32` / `u32`
    Four,
}

impl IntWidth {
    /// Maps a requested byte count to a width, rejecting anything but 1, 2 and 4.
    pub fn from_amount(amount: usize) -> CursorResult<Self> {
        match amount {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            _ => Err(invalid_int_width_err!("IntWidth::from_amount", amount)),
        }
    }

    /// Number of bytes covered by this width.
    pub const fn size(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    /// Decodes `bytes` as an integer of this width.
    ///
    /// Returns `None` when `bytes` is not exactly [`IntWidth::size`] long.
    /// Single bytes ignore `endianness`.
    pub fn decode(self, bytes: &[u8], signed: bool, endianness: Endianness) -> Option<i64> {
        let value = match (self, bytes) {
            (Self::One, &[b0]) => {
                if signed {
                    i64::from(i8::from_be_bytes([b0]))
                } else {
                    i64::from(b0)
                }
            }
            (Self::Two, &[b0, b1]) => {
                let raw = [b0, b1];
                match (signed, endianness) {
                    (true, Endianness::Big) => i64::from(i16::from_be_bytes(raw)),
                    (true, Endianness::Little) => i64::from(i16::from_le_bytes(raw)),
                    (false, Endianness::Big) => i64::from(u16::from_be_bytes(raw)),
                    (false, Endianness::Little) => i64::from(u16::from_le_bytes(raw)),
                }
            }
            (Self::Four, &[b0, b1, b2, b3]) => {
                let raw = [b0, b1, b2, b3];
                match (signed, endianness) {
                    (true, Endianness::Big) => i64::from(i32::from_be_bytes(raw)),
                    (true, Endianness::Little) => i64::from(i32::from_le_bytes(raw)),
                    (false, Endianness::Big) => i64::from(u32::from_be_bytes(raw)),
                    (false, Endianness::Little) => i64::from(u32::from_le_bytes(raw)),
                }
            }
            _ => return None,
        };

        Some(value)
    }
}

/// How to decode an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntOptions {
    /// Two's complement decoding when `true`.
    pub signed: bool,
    /// Byte order for this call only; the cursor's endianness is used when `None`.
    pub endian: Option<Endianness>,
}

impl IntOptions {
    /// Signed decoding in the cursor's byte order.
    pub const fn signed() -> Self {
        Self {
            signed: true,
            endian: None,
        }
    }

    /// Unsigned decoding in the cursor's byte order.
    pub const fn unsigned() -> Self {
        Self {
            signed: false,
            endian: None,
        }
    }

    /// Overrides the byte order for this call.
    #[must_use]
    pub const fn with_endian(self, endian: Endianness) -> Self {
        Self {
            endian: Some(endian),
            ..self
        }
    }
}

impl Default for IntOptions {
    fn default() -> Self {
        Self::signed()
    }
}
