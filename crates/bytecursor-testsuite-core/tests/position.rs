use bytecursor::{ByteCursor, CursorErrorKind, EatOptions, Eaten, Endianness, IntOptions};
use bytecursor_testsuite_core::{ff_cursor, sentence_cursor};
use rstest::rstest;

#[test]
fn can_rewind() {
    let mut cursor = sentence_cursor();
    cursor.eat(9);
    cursor.rewind(Some(3));
    assert_eq!(cursor.eat(3).unwrap(), b"did");
}

#[rstest]
#[case(None)]
#[case(Some(0))]
fn rewind_to_start(#[case] amount: Option<usize>) {
    let mut cursor = sentence_cursor();
    cursor.eat(12);

    cursor.rewind(amount);

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.eat(5).unwrap(), b"where");
}

#[test]
fn rewind_past_start_clamps_to_zero() {
    let mut cursor = sentence_cursor();
    cursor.eat(4);

    cursor.rewind(Some(100));

    assert_eq!(cursor.position(), 0);
}

#[test]
fn peek_leaves_position_alone() {
    let mut cursor = sentence_cursor();
    cursor.eat(6);

    assert_eq!(cursor.peek(3).unwrap(), b"did");
    assert_eq!(cursor.position(), 6);
    assert_eq!(cursor.eat(3).unwrap(), b"did");
}

#[test]
fn peek_past_the_end_leaves_position_alone() {
    let mut cursor = ByteCursor::from("abc");
    cursor.eat(1);

    assert_eq!(cursor.peek(100).unwrap(), b"bc");
    assert_eq!(cursor.position(), 1);
}

#[test]
fn peek_on_exhausted_cursor() {
    let mut cursor = ByteCursor::from("abc");
    cursor.eat(3);

    assert_eq!(cursor.peek(1), None);
    assert_eq!(cursor.position(), 3);
}

#[test]
fn peek_int() {
    let mut cursor = ff_cursor(Endianness::Big);

    assert_eq!(
        cursor.peek_int(4, IntOptions::signed().with_endian(Endianness::Little)).unwrap(),
        Some(255)
    );
    assert_eq!(cursor.peek_int(4, IntOptions::unsigned()).unwrap(), Some(4278190080));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn peek_int_error_leaves_position_alone() {
    let mut cursor = ff_cursor(Endianness::Big);
    cursor.eat(1);

    let err = cursor.peek_int(4, IntOptions::default()).unwrap_err();

    assert!(matches!(err.kind(), CursorErrorKind::NotEnoughBytes { .. }));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn peek_text_and_peek_with() {
    let mut cursor = sentence_cursor();

    assert_eq!(cursor.peek_text(5).as_deref(), Some("where"));
    assert_eq!(
        cursor.peek_with(2, EatOptions::Bytes).unwrap(),
        Some(Eaten::Bytes(b"wh".to_vec()))
    );
    assert_eq!(cursor.position(), 0);
}

#[test]
fn reading_after_rewind_reuses_the_same_bytes() {
    let mut cursor = ByteCursor::from_bytes([0x00, 0x01, 0x00, 0x02]);

    let first = cursor.eat_unsigned_int(2, None).unwrap();
    cursor.rewind(Some(2));
    let again = cursor.eat_unsigned_int(2, None).unwrap();

    assert_eq!(first, Some(1));
    assert_eq!(first, again);
    assert_eq!(cursor.eat_unsigned_int(2, None).unwrap(), Some(2));
}
