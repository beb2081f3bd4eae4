use bytecursor::{ByteCursor, CursorErrorKind, Separator, SeparatorFault};
use bytecursor_testsuite_core::NUL_SEPARATED;
use rstest::rstest;

#[test]
fn eating_strings() {
    let mut cursor = ByteCursor::from_bytes(NUL_SEPARATED);

    assert_eq!(cursor.eat_string().as_deref(), Some("what"));
    assert_eq!(cursor.eat_string().as_deref(), Some("the"));
    assert_eq!(cursor.eat_string().as_deref(), Some("who"));
    assert_eq!(cursor.eat_string(), None);
}

#[test]
fn eating_with_custom_separator() {
    let mut cursor = ByteCursor::from_bytes(b"hello\xffworld");

    assert_eq!(cursor.eat_delimited(0xffu8).unwrap().as_deref(), Some("hello"));
    assert_eq!(cursor.eat_delimited(255).unwrap().as_deref(), Some("world"));
    assert_eq!(cursor.eat_delimited(255).unwrap(), None);
}

#[test]
fn character_separator() {
    let mut cursor = ByteCursor::from("heyhyehyehye");
    assert_eq!(cursor.eat_delimited('y').unwrap().as_deref(), Some("he"));
    assert_eq!(cursor.eat_delimited("y").unwrap().as_deref(), Some("h"));
}

#[test]
fn separator_as_last_byte_is_excluded() {
    let mut cursor = ByteCursor::from("abc,");

    assert_eq!(cursor.eat_delimited(',').unwrap().as_deref(), Some("abc"));
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn separator_as_first_byte_yields_empty_text() {
    let mut cursor = ByteCursor::from(",abc");

    assert_eq!(cursor.eat_delimited(',').unwrap().as_deref(), Some(""));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn missing_separator_returns_everything_left() {
    let mut cursor = ByteCursor::from("no separator here");
    cursor.eat(3);

    assert_eq!(cursor.eat_string().as_deref(), Some("separator here"));
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn separator_values() {
    assert_eq!(Separator::default(), Separator::NUL);
    assert_eq!(Separator::from(b',').byte(), b',');
    assert_eq!(Separator::new(0x7f).byte(), 0x7f);
}

#[rstest]
#[case::float(44.0, b',')]
#[case::zero(0.0, 0)]
#[case::max(255.0, 0xff)]
fn whole_floats_are_accepted(#[case] value: f64, #[case] expected: u8) {
    let mut cursor = ByteCursor::from_bytes([b'a', expected, b'b']);
    assert_eq!(cursor.eat_delimited(value).unwrap().as_deref(), Some("a"));
}

#[rstest]
#[case::negative_int(-1i64, SeparatorFault::OutOfRange)]
#[case::large_int(256i64, SeparatorFault::OutOfRange)]
#[case::very_large_int(i64::MAX, SeparatorFault::OutOfRange)]
fn invalid_integer_separators(#[case] value: i64, #[case] fault: SeparatorFault) {
    let mut cursor = ByteCursor::from("abc");

    let err = cursor.eat_delimited(value).unwrap_err();

    assert_eq!(err.kind(), &CursorErrorKind::InvalidSeparator { fault });
    assert_eq!(cursor.position(), 0);
}

#[rstest]
#[case::fraction(1.5, SeparatorFault::TypeMismatch)]
#[case::nan(f64::NAN, SeparatorFault::TypeMismatch)]
#[case::negative(-1.0, SeparatorFault::OutOfRange)]
#[case::large(256.0, SeparatorFault::OutOfRange)]
#[case::infinite(f64::INFINITY, SeparatorFault::OutOfRange)]
fn invalid_float_separators(#[case] value: f64, #[case] fault: SeparatorFault) {
    let err = ByteCursor::from("abc").eat_delimited(value).unwrap_err();
    assert_eq!(err.kind(), &CursorErrorKind::InvalidSeparator { fault });
}

#[rstest]
#[case::empty("", SeparatorFault::TypeMismatch)]
#[case::two_chars("ab", SeparatorFault::TypeMismatch)]
fn invalid_text_separators(#[case] value: &str, #[case] fault: SeparatorFault) {
    let err = ByteCursor::from("abc").eat_delimited(value).unwrap_err();
    assert_eq!(err.kind(), &CursorErrorKind::InvalidSeparator { fault });
}

#[test]
fn non_latin1_char_separator() {
    let err = ByteCursor::from("abc").eat_delimited('\u{20ac}').unwrap_err();
    assert_eq!(
        err.kind(),
        &CursorErrorKind::InvalidSeparator {
            fault: SeparatorFault::OutOfRange
        }
    );
}

#[test]
fn delimited_text_is_decoded_lossily() {
    let mut cursor = ByteCursor::from_bytes([b'o', 0xc3, b'k', 0x00]);
    assert_eq!(cursor.eat_string().as_deref(), Some("o\u{FFFD}k"));
}
