use alloc::vec::Vec;

use crate::IntOptions;

/// What `eat_with` and friends should hand back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EatOptions {
    /// The raw bytes.
    #[default]
    Bytes,
    /// The bytes decoded as an integer.
    Integer(IntOptions),
}

impl EatOptions {
    /// Signed integer decoding in the cursor's byte order.
    pub const fn integer() -> Self {
        Self::Integer(IntOptions::signed())
    }
}

impl From<IntOptions> for EatOptions {
    fn from(options: IntOptions) -> Self {
        Self::Integer(options)
    }
}

/// Value consumed from a cursor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Eaten {
    /// An owned copy of the consumed bytes.
    Bytes(Vec<u8>),
    /// A decoded integer.
    Int(i64),
}

impl Eaten {
    /// Returns the bytes, if this is not an integer.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Int(_) => None,
        }
    }

    /// Returns the integer, if this is not raw bytes.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Bytes(_) => None,
            Self::Int(value) => Some(*value),
        }
    }

    /// Converts into the owned bytes, if this is not an integer.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::Int(_) => None,
        }
    }
}
