use bytecursor::{
    ByteCursor, CursorError, CursorErrorKind, Endianness, IntOptions, IntWidth, SeparatorFault,
    invalid_separator_err, not_enough_bytes_err,
};
use expect_test::expect;

#[test]
fn invalid_endianness_message() {
    let err = Endianness::parse("huge").unwrap_err();
    expect!["[Endianness::parse] unrecognized endianness `huge`, acceptable inputs are: [LE, little, BE, big]"]
        .assert_eq(&err.to_string());
}

#[test]
fn set_endianness_reports_the_same_error() {
    let err = ByteCursor::new().set_endianness("massive").map(|_| ()).unwrap_err();
    assert_eq!(err.context(), "Endianness::parse");
    assert_eq!(
        err.kind(),
        &CursorErrorKind::InvalidEndianness {
            value: "massive".to_owned()
        }
    );
}

#[test]
fn invalid_integer_width_message() {
    let err = IntWidth::from_amount(3).unwrap_err();
    expect!["[IntWidth::from_amount] invalid integer width (3 bytes), valid widths are [1, 2, 4]"]
        .assert_eq(&err.to_string());
}

#[test]
fn not_enough_bytes_message() {
    let mut cursor = ByteCursor::from_bytes([0x01, 0x02]);
    let err = cursor.eat_int(4, IntOptions::default()).unwrap_err();
    expect!["[ByteCursor::eat_int] not enough bytes to decode an integer: received 2 bytes, expected 4 bytes"]
        .assert_eq(&err.to_string());
}

#[test]
fn invalid_separator_messages() {
    let err = ByteCursor::from("abc").eat_delimited("ab").unwrap_err();
    expect!["[str::into_separator] invalid separator: expected a number between [0, 255] or a single character"]
        .assert_eq(&err.to_string());

    let err = ByteCursor::from("abc").eat_delimited(-3i64).unwrap_err();
    expect!["[i64::into_separator] invalid separator: value is outside of [0, 255]"].assert_eq(&err.to_string());
}

#[test]
fn report_includes_the_source() {
    let err = ByteCursor::from("abc").eat_delimited(300i64).unwrap_err();
    expect![
        "[i64::into_separator] invalid separator: value is outside of [0, 255], caused by: out of range integral type conversion attempted"
    ]
    .assert_eq(&err.report().to_string());
}

#[test]
fn report_without_source_is_the_display() {
    let err = Endianness::parse("huge").unwrap_err();
    assert_eq!(err.report().to_string(), err.to_string());
}

#[test]
fn error_macros_default_to_the_calling_function() {
    let err: CursorError = not_enough_bytes_err!(1, 4);
    assert!(
        err.context().ends_with("error_macros_default_to_the_calling_function"),
        "{}",
        err.context()
    );

    let err: CursorError = invalid_separator_err!("custom", SeparatorFault::TypeMismatch);
    assert_eq!(err.context(), "custom");
}

#[test]
fn attaching_sources() {
    let err: CursorError = not_enough_bytes_err!("read_header", 0, 2);
    let err = err.with_source(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed"));
    expect!["[read_header] not enough bytes to decode an integer: received 0 bytes, expected 2 bytes, caused by: stream closed"]
        .assert_eq(&err.report().to_string());
}

#[test]
fn report_walks_the_whole_chain() {
    let inner = ByteCursor::from("abc").eat_delimited(1000i64).unwrap_err();
    let outer: CursorError = invalid_separator_err!("read_record", SeparatorFault::OutOfRange);
    let outer = outer.with_source(inner);

    expect![
        "[read_record] invalid separator: value is outside of [0, 255], caused by: [i64::into_separator] invalid separator: value is outside of [0, 255], caused by: out of range integral type conversion attempted"
    ]
    .assert_eq(&outer.report().to_string());
}

#[test]
fn source_is_exposed_through_std_error() {
    use std::error::Error as _;

    let err = ByteCursor::from("abc").eat_delimited('\u{20ac}').unwrap_err();
    assert!(err.source().is_some());

    let err = Endianness::parse("huge").unwrap_err();
    assert!(err.source().is_none());
}

#[test]
fn cursor_errors_convert_into_io_errors() {
    let err = IntWidth::from_amount(8).unwrap_err();

    let io_err = std::io::Error::from(err);

    assert_eq!(io_err.kind(), std::io::ErrorKind::Other);
    let inner = io_err.into_inner().unwrap().downcast::<CursorError>().unwrap();
    assert_eq!(inner.kind(), &CursorErrorKind::InvalidIntegerWidth { width: 8 });
}

#[test]
fn anyhow_interop() {
    fn decode(bytes: &[u8]) -> anyhow::Result<i64> {
        let mut cursor = ByteCursor::from_bytes(bytes);
        let value = cursor.eat_unsigned_int(4, None)?;
        value.ok_or_else(|| anyhow::anyhow!("empty input"))
    }

    assert_eq!(decode(&[0, 0, 1, 0]).unwrap(), 256);
    assert_eq!(decode(&[]).unwrap_err().to_string(), "empty input");

    let err = decode(&[0, 0]).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CursorError>().map(CursorError::kind),
        Some(CursorErrorKind::NotEnoughBytes {
            received: 2,
            expected: 4
        })
    ));
}
