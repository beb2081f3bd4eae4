#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::std_instead_of_core)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
extern crate tracing;

#[macro_use]
mod macros;

mod cursor;
mod endian;
mod error;
mod hooks;
mod int;
mod options;
mod separator;

// Flat API hierarchy

pub use self::cursor::*;
pub use self::endian::*;
pub use self::error::*;
pub use self::hooks::*;
pub use self::int::*;
pub use self::options::*;
pub use self::separator::*;
