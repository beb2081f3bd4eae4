#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

mod feeder;

pub use self::feeder::*;
