use core::fmt;
use core::str::FromStr;

use crate::{CursorError, CursorResult};

/// Byte order used to decode multi-byte integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Parses an endianness token.
    ///
    /// `le` and `little` map to [`Endianness::Little`], `be` and `big` to [`Endianness::Big`],
    /// ignoring ASCII case. Anything else is an `InvalidEndianness` error.
    pub fn parse(value: &str) -> CursorResult<Self> {
        const CTX: &str = "Endianness::parse";

        if value.eq_ignore_ascii_case("le") || value.eq_ignore_ascii_case("little") {
            Ok(Self::Little)
        } else if value.eq_ignore_ascii_case("be") || value.eq_ignore_ascii_case("big") {
            Ok(Self::Big)
        } else {
            Err(invalid_endianness_err!(CTX, value))
        }
    }

    /// Short name of this byte order: `BE` or `LE`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Big => "BE",
            Self::Little => "LE",
        }
    }
}

impl FromStr for Endianness {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Endianness {
    type Error = CursorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
