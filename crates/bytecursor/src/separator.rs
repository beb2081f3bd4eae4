use crate::{CursorResult, SeparatorFault};

/// Byte terminating a delimited read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Separator(u8);

impl Separator {
    /// The NUL byte, terminator of C strings.
    pub const NUL: Self = Self(0x00);

    /// Wraps a raw byte.
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    /// Returns the raw byte.
    pub const fn byte(self) -> u8 {
        self.0
    }
}

impl From<u8> for Separator {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

/// Conversion of loosely typed delimiter arguments into a [`Separator`].
///
/// Numbers must lie in `[0, 255]` and characters must have a code point in that range, otherwise
/// the conversion fails with [`SeparatorFault::OutOfRange`]. Values that cannot denote a byte at all
/// (NaN, fractional numbers, text that is not exactly one character) fail with
/// [`SeparatorFault::TypeMismatch`].
pub trait IntoSeparator {
    /// Performs the conversion.
    fn into_separator(self) -> CursorResult<Separator>;
}

impl IntoSeparator for Separator {
    fn into_separator(self) -> CursorResult<Separator> {
        Ok(self)
    }
}

impl IntoSeparator for u8 {
    fn into_separator(self) -> CursorResult<Separator> {
        Ok(Separator(self))
    }
}

impl IntoSeparator for char {
    fn into_separator(self) -> CursorResult<Separator> {
        u8::try_from(self)
            .map(Separator)
            .map_err(|e| crate::invalid_separator_err_with_source("char::into_separator", SeparatorFault::OutOfRange, e))
    }
}

impl IntoSeparator for &str {
    fn into_separator(self) -> CursorResult<Separator> {
        let mut chars = self.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => c.into_separator(),
            _ => Err(invalid_separator_err!("str::into_separator", SeparatorFault::TypeMismatch)),
        }
    }
}

impl IntoSeparator for i64 {
    fn into_separator(self) -> CursorResult<Separator> {
        u8::try_from(self)
            .map(Separator)
            .map_err(|e| crate::invalid_separator_err_with_source("i64::into_separator", SeparatorFault::OutOfRange, e))
    }
}

impl IntoSeparator for i32 {
    fn into_separator(self) -> CursorResult<Separator> {
        i64::from(self).into_separator()
    }
}

impl IntoSeparator for usize {
    fn into_separator(self) -> CursorResult<Separator> {
        u8::try_from(self).map(Separator).map_err(|e| {
            crate::invalid_separator_err_with_source("usize::into_separator", SeparatorFault::OutOfRange, e)
        })
    }
}

impl IntoSeparator for f64 {
    fn into_separator(self) -> CursorResult<Separator> {
        const CTX: &str = "f64::into_separator";

        if self.is_nan() {
            return Err(invalid_separator_err!(CTX, SeparatorFault::TypeMismatch));
        }

        if !(0.0..=255.0).contains(&self) {
            return Err(invalid_separator_err!(CTX, SeparatorFault::OutOfRange));
        }

        if self.fract() != 0.0 {
            return Err(invalid_separator_err!(CTX, SeparatorFault::TypeMismatch));
        }

        // Integral and within [0, 255].
        #[expect(clippy::as_conversions, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = self as u8;

        Ok(Separator(byte))
    }
}
