//! Oracles.
//!
//! Oracles take a test case and determine whether we have a bug. The cursor
//! oracle replays a generated sequence of operations and checks, after each
//! one, the observable state against what the operation promises: offset
//! bounds, returned bytes matching the buffer, peeks leaving the offset alone,
//! argument errors leaving the cursor untouched.
//!
//! When an oracle finds a bug, it should report it to the fuzzing engine by
//! panicking.

use arbitrary::{Arbitrary as _, Unstructured};
use bytecursor::{ByteCursor, CursorErrorKind, EatOptions, Eaten, Endianness, IntOptions};

use crate::generators::{CursorOp, CursorProgram};

pub fn cursor_program(data: &[u8]) {
    let Ok(program) = CursorProgram::arbitrary_take_rest(Unstructured::new(data)) else {
        return;
    };

    run_program(&program);
}

pub fn run_program(program: &CursorProgram) {
    let endianness = if program.little_endian {
        Endianness::Little
    } else {
        Endianness::Big
    };

    let mut cursor = ByteCursor::with_endianness(&program.initial, endianness);

    for op in &program.ops {
        apply(&mut cursor, op);
        assert!(cursor.position() <= cursor.len(), "offset out of bounds after {op:?}");
        assert_eq!(cursor.remaining(), cursor.len() - cursor.position());
    }
}

fn apply(cursor: &mut ByteCursor, op: &CursorOp) {
    let before = cursor.position();
    let len = cursor.len();

    match op {
        CursorOp::Append(data) => {
            let previous = cursor.buffer().to_vec();
            cursor.append(data);
            assert_eq!(cursor.position(), before);
            assert_eq!(&cursor.buffer()[..previous.len()], previous.as_slice());
            assert_eq!(&cursor.buffer()[previous.len()..], data.as_slice());
        }
        CursorOp::Finish => {
            cursor.finish();
            assert!(cursor.is_finished());
            assert_eq!(cursor.position(), before);
        }
        CursorOp::Eat(amount) => {
            let amount = usize::from(*amount);
            let expected = slice_of(cursor.buffer(), before, amount);
            let eaten = cursor.eat(amount);
            assert_eq!(eaten, expected);
            assert_eq!(cursor.position(), before + eaten.map_or(0, |bytes| bytes.len()));
        }
        CursorOp::EatInt { amount, signed, little } => {
            let amount = usize::from(*amount);
            let options = IntOptions {
                signed: *signed,
                endian: little.map(|little| if little { Endianness::Little } else { Endianness::Big }),
            };

            match cursor.eat_int(amount, options) {
                Ok(Some(_)) => {
                    assert!(matches!(amount, 1 | 2 | 4));
                    assert_eq!(cursor.position(), before + amount);
                }
                Ok(None) => {
                    assert_eq!(before, len);
                    assert_eq!(cursor.position(), before);
                }
                Err(e) => {
                    match e.kind() {
                        CursorErrorKind::InvalidIntegerWidth { width } => {
                            assert_eq!(*width, amount);
                            assert!(!matches!(amount, 1 | 2 | 4));
                        }
                        CursorErrorKind::NotEnoughBytes { received, expected } => {
                            assert!(received < expected);
                        }
                        other => unreachable!("unexpected error kind: {other:?}"),
                    }
                    assert_eq!(cursor.position(), before);
                }
            }
        }
        CursorOp::EatBool => {
            let expected = cursor.buffer().get(before).is_some_and(|&b| b != 0);
            assert_eq!(cursor.eat_bool(), expected);
        }
        CursorOp::EatText(amount) => {
            let amount = usize::from(*amount);
            let expected = slice_of(cursor.buffer(), before, amount).map(|b| String::from_utf8_lossy(&b).into_owned());
            assert_eq!(cursor.eat_text(amount), expected);
        }
        CursorOp::Peek(amount) => {
            let amount = usize::from(*amount);
            let expected = slice_of(cursor.buffer(), before, amount);
            assert_eq!(cursor.peek(amount), expected);
            assert_eq!(cursor.position(), before);
        }
        CursorOp::PeekInt { amount, signed } => {
            let options = if *signed {
                IntOptions::signed()
            } else {
                IntOptions::unsigned()
            };
            let _ = cursor.peek_int(usize::from(*amount), options);
            assert_eq!(cursor.position(), before);
        }
        CursorOp::Rewind(amount) => {
            let amount = amount.map(usize::from);
            cursor.rewind(amount);
            let expected = match amount {
                None | Some(0) => 0,
                Some(amount) => before.saturating_sub(amount),
            };
            assert_eq!(cursor.position(), expected);
        }
        CursorOp::EatDelimited(separator) => {
            let Ok(result) = cursor.eat_delimited(*separator) else {
                panic!("rejected byte separator {separator:#04x}");
            };
            assert_eq!(result.is_none(), before == len);
            if result.is_some() {
                let consumed = &cursor.buffer()[before..cursor.position()];
                let separators = consumed.iter().filter(|&&b| b == *separator).count();
                assert!(separators <= 1);
                assert!(separators == 0 || consumed.last() == Some(separator));
            }
        }
        CursorOp::EatString => {
            let result = cursor.eat_string();
            assert_eq!(result.is_none(), before == len);
        }
        CursorOp::EatRemaining => {
            let expected = slice_of(cursor.buffer(), before, usize::MAX);
            assert_eq!(cursor.eat_remaining(), expected);
            assert_eq!(cursor.remaining(), 0);
        }
        CursorOp::EatChunks { chunk_size, integer } => {
            let chunk_size = usize::from(*chunk_size);
            let options = if *integer { EatOptions::integer() } else { EatOptions::Bytes };

            match cursor.eat_chunks(chunk_size, options) {
                Ok(chunks) => {
                    assert_eq!(cursor.remaining(), 0);
                    let raw: Vec<u8> = chunks.iter().filter_map(Eaten::as_bytes).flatten().copied().collect();
                    if !*integer || chunk_size == 0 {
                        assert_eq!(raw.as_slice(), &cursor.buffer()[before..]);
                    }
                }
                Err(_) => {
                    assert!(*integer);
                    assert_eq!(cursor.position(), before);
                }
            }
        }
        CursorOp::SetEndianness(token) => {
            let previous = cursor.endianness();
            let valid = ["le", "little", "be", "big"]
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(token));

            match cursor.set_endianness(token) {
                Ok(_) => assert!(valid),
                Err(e) => {
                    assert!(!valid);
                    assert!(matches!(e.kind(), CursorErrorKind::InvalidEndianness { .. }));
                    assert_eq!(cursor.endianness(), previous);
                }
            }
        }
    }
}

fn slice_of(buffer: &[u8], start: usize, amount: usize) -> Option<Vec<u8>> {
    if start >= buffer.len() || amount == 0 {
        return None;
    }

    let end = start.saturating_add(amount).min(buffer.len());
    Some(buffer[start..end].to_vec())
}
