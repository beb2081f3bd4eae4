//! Fuzzing support for `bytecursor`.
//!
//! Shared between the `fuzz/` targets and the regression tests of the test suite, which replay
//! previously found inputs through the very same oracles.

pub mod generators;
pub mod oracles;
