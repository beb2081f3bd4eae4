#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

use core::fmt;

/// Anything that can be attached to an [`Error`] as its cause.
///
/// With `std` this is any `std::error::Error`, otherwise any `Display + Debug` value.
#[cfg(feature = "std")]
pub trait Source: std::error::Error + Send + Sync + 'static {}

#[cfg(feature = "std")]
impl<T> Source for T where T: std::error::Error + Send + Sync + 'static {}

/// Anything that can be attached to an [`Error`] as its cause.
///
/// With `std` this is any `std::error::Error`, otherwise any `Display + Debug` value.
#[cfg(not(feature = "std"))]
pub trait Source: fmt::Display + fmt::Debug + Send + Sync + 'static {}

#[cfg(not(feature = "std"))]
impl<T> Source for T where T: fmt::Display + fmt::Debug + Send + Sync + 'static {}

#[cfg(feature = "std")]
type Cause = alloc::boxed::Box<dyn std::error::Error + Send + Sync>;

#[cfg(all(feature = "alloc", not(feature = "std")))]
type Cause = alloc::boxed::Box<dyn Source>;

/// A domain-specific error kind tagged with the operation that raised it.
#[derive(Debug)]
pub struct Error<Kind> {
    context: &'static str,
    kind: Kind,
    #[cfg(feature = "alloc")]
    cause: Option<Cause>,
}

impl<Kind> Error<Kind> {
    /// Creates an error raised from `context` (e.g.: `ByteCursor::eat_int`).
    #[cold]
    #[must_use]
    pub const fn new(context: &'static str, kind: Kind) -> Self {
        Self {
            context,
            kind,
            #[cfg(feature = "alloc")]
            cause: None,
        }
    }

    /// Attaches the underlying cause, replacing any previous one.
    ///
    /// Without `alloc` the cause is discarded.
    #[cold]
    #[must_use]
    pub fn with_source<E: Source>(self, source: E) -> Self {
        #[cfg(feature = "alloc")]
        {
            Self {
                cause: Some(alloc::boxed::Box::new(source)),
                ..self
            }
        }

        #[cfg(not(feature = "alloc"))]
        {
            let _ = source;
            self
        }
    }

    /// Returns the error kind.
    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns the operation which raised this error.
    pub const fn context(&self) -> &'static str {
        self.context
    }

    /// Renders this error followed by its causes, separated by `, caused by: `.
    pub const fn report(&self) -> Report<'_, Kind> {
        Report(self)
    }
}

impl<Kind: fmt::Display> fmt::Display for Error<Kind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.context, self.kind)
    }
}

#[cfg(feature = "std")]
impl<Kind> std::error::Error for Error<Kind>
where
    Kind: fmt::Debug + fmt::Display,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| -> &(dyn std::error::Error + 'static) { cause })
    }
}

#[cfg(feature = "std")]
impl<Kind> From<Error<Kind>> for std::io::Error
where
    Kind: fmt::Debug + fmt::Display + Send + Sync + 'static,
{
    fn from(error: Error<Kind>) -> Self {
        Self::other(error)
    }
}

/// Display adapter returned by [`Error::report`].
pub struct Report<'a, Kind>(&'a Error<Kind>);

impl<Kind: fmt::Display> fmt::Display for Report<'_, Kind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;

        #[cfg(feature = "std")]
        {
            let mut next = self.0.cause.as_deref().map(|cause| -> &(dyn std::error::Error + 'static) { cause });

            while let Some(cause) = next {
                write!(f, ", caused by: {cause}")?;
                next = std::error::Error::source(cause);
            }
        }

        #[cfg(all(feature = "alloc", not(feature = "std")))]
        if let Some(cause) = &self.0.cause {
            write!(f, ", caused by: {cause}")?;
        }

        Ok(())
    }
}
