//! Test case generators.
//!
//! Test case generators take raw, unstructured input from a fuzzer
//! (e.g. libFuzzer) and translate that into a structured test case: here,
//! a sequence of operations to run against a cursor.

use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub enum CursorOp {
    Append(Vec<u8>),
    Finish,
    Eat(u16),
    EatInt { amount: u8, signed: bool, little: Option<bool> },
    EatBool,
    EatText(u16),
    Peek(u16),
    PeekInt { amount: u8, signed: bool },
    Rewind(Option<u16>),
    EatDelimited(u8),
    EatString,
    EatRemaining,
    EatChunks { chunk_size: u8, integer: bool },
    SetEndianness(String),
}

#[derive(Arbitrary, Debug)]
pub struct CursorProgram {
    pub initial: Vec<u8>,
    pub little_endian: bool,
    pub ops: Vec<CursorOp>,
}
