use alloc::string::String;
use core::fmt;

use bytecursor_error::{Error, Source};

/// Error returned by fallible cursor operations.
pub type CursorError = Error<CursorErrorKind>;

/// A result type for cursor operations, which can either succeed with a value of type `T`
/// or fail with a [`CursorError`].
pub type CursorResult<T> = Result<T, CursorError>;

/// Why a separator argument was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeparatorFault {
    /// The argument is not shaped like a byte (NaN, fractional number, text that is not a single character).
    TypeMismatch,
    /// The argument is a number or a character whose code lies outside of `[0, 255]`.
    OutOfRange,
}

impl fmt::Display for SeparatorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch => write!(f, "expected a number between [0, 255] or a single character"),
            Self::OutOfRange => write!(f, "value is outside of [0, 255]"),
        }
    }
}

/// Enum representing the different kinds of cursor errors.
///
/// Running out of data is not part of this list: it is reported as `None` by the cursor.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CursorErrorKind {
    /// An endianness token is not one of `le`, `little`, `be` or `big`.
    InvalidEndianness {
        /// The rejected token.
        value: String,
    },
    /// Integer decoding was requested with a width other than 1, 2 or 4 bytes.
    InvalidIntegerWidth {
        /// The requested width, in bytes.
        width: usize,
    },
    /// A delimiter argument could not be turned into a byte.
    InvalidSeparator {
        /// Whether the argument had the wrong shape or was out of range.
        fault: SeparatorFault,
    },
    /// An integer could not be decoded because the buffer ends before its last byte.
    NotEnoughBytes {
        /// Number of bytes remaining.
        received: usize,
        /// Number of bytes expected.
        expected: usize,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for CursorErrorKind {}

impl fmt::Display for CursorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndianness { value } => write!(
                f,
                "unrecognized endianness `{value}`, acceptable inputs are: [LE, little, BE, big]"
            ),
            Self::InvalidIntegerWidth { width } => {
                write!(f, "invalid integer width ({width} bytes), valid widths are [1, 2, 4]")
            }
            Self::InvalidSeparator { fault } => write!(f, "invalid separator: {fault}"),
            Self::NotEnoughBytes { received, expected } => write!(
                f,
                "not enough bytes to decode an integer: received {received} bytes, expected {expected} bytes"
            ),
        }
    }
}

/// Trait for adding a source to an error type.
pub trait WithSource {
    /// Adds a source to the error.
    #[must_use]
    fn with_source<E: Source>(self, source: E) -> Self;
}

impl<T> WithSource for Error<T> {
    fn with_source<E: Source>(self, source: E) -> Self {
        self.with_source(source)
    }
}

/// Trait for creating "invalid endianness" errors.
pub trait InvalidEndiannessErr {
    /// Creates a new "invalid endianness" error for the rejected `value`.
    fn invalid_endianness(context: &'static str, value: String) -> Self;
}

/// Helper function to create an "invalid endianness" error.
pub fn invalid_endianness_err<T: InvalidEndiannessErr>(context: &'static str, value: &str) -> T {
    T::invalid_endianness(context, String::from(value))
}

/// Trait for creating "invalid integer width" errors.
pub trait InvalidIntWidthErr {
    /// Creates a new "invalid integer width" error for the requested `width`.
    fn invalid_int_width(context: &'static str, width: usize) -> Self;
}

/// Helper function to create an "invalid integer width" error.
pub fn invalid_int_width_err<T: InvalidIntWidthErr>(context: &'static str, width: usize) -> T {
    T::invalid_int_width(context, width)
}

/// Trait for creating "invalid separator" errors.
pub trait InvalidSeparatorErr {
    /// Creates a new "invalid separator" error.
    fn invalid_separator(context: &'static str, fault: SeparatorFault) -> Self;
}

/// Helper function to create an "invalid separator" error.
pub fn invalid_separator_err<T: InvalidSeparatorErr>(context: &'static str, fault: SeparatorFault) -> T {
    T::invalid_separator(context, fault)
}

/// Helper function to create an "invalid separator" error with a source.
pub fn invalid_separator_err_with_source<T: InvalidSeparatorErr + WithSource, E: Source>(
    context: &'static str,
    fault: SeparatorFault,
    source: E,
) -> T {
    T::invalid_separator(context, fault).with_source(source)
}

/// Trait for creating "not enough bytes" errors.
pub trait NotEnoughBytesErr {
    /// Creates a new "not enough bytes" error.
    fn not_enough_bytes(context: &'static str, received: usize, expected: usize) -> Self;
}

/// Helper function to create a "not enough bytes" error.
pub fn not_enough_bytes_err<T: NotEnoughBytesErr>(context: &'static str, received: usize, expected: usize) -> T {
    T::not_enough_bytes(context, received, expected)
}

impl InvalidEndiannessErr for CursorError {
    fn invalid_endianness(context: &'static str, value: String) -> Self {
        Self::new(context, CursorErrorKind::InvalidEndianness { value })
    }
}

impl InvalidIntWidthErr for CursorError {
    fn invalid_int_width(context: &'static str, width: usize) -> Self {
        Self::new(context, CursorErrorKind::InvalidIntegerWidth { width })
    }
}

impl InvalidSeparatorErr for CursorError {
    fn invalid_separator(context: &'static str, fault: SeparatorFault) -> Self {
        Self::new(context, CursorErrorKind::InvalidSeparator { fault })
    }
}

impl NotEnoughBytesErr for CursorError {
    fn not_enough_bytes(context: &'static str, received: usize, expected: usize) -> Self {
        Self::new(context, CursorErrorKind::NotEnoughBytes { received, expected })
    }
}
