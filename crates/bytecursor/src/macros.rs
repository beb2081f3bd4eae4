/// Finds the name of the function in which this macro is expanded
#[macro_export]
macro_rules! function {
    // Taken from https://stackoverflow.com/a/40234666
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}

/// Creates an "invalid endianness" error for an unrecognized byte order token.
///
/// # Examples
///
/// ```
/// use bytecursor::{invalid_endianness_err, CursorError};
///
/// let err: CursorError = invalid_endianness_err!("config", "huge");
/// ```
///
/// If the context is not provided, the current function name is used.
#[macro_export]
macro_rules! invalid_endianness_err {
    ( $context:expr, $value:expr $(,)? ) => {{
        $crate::invalid_endianness_err($context, $value)
    }};
    ( $value:expr $(,)? ) => {{
        $crate::invalid_endianness_err!($crate::function!(), $value)
    }};
}

/// Creates an "invalid integer width" error for a width outside of `{1, 2, 4}`.
///
/// If the context is not provided, the current function name is used.
#[macro_export]
macro_rules! invalid_int_width_err {
    ( $context:expr, $width:expr $(,)? ) => {{
        $crate::invalid_int_width_err($context, $width)
    }};
    ( $width:expr $(,)? ) => {{
        $crate::invalid_int_width_err!($crate::function!(), $width)
    }};
}

/// Creates an "invalid separator" error.
///
/// # Examples
///
/// ```
/// use bytecursor::{invalid_separator_err, CursorError, SeparatorFault};
///
/// let err: CursorError = invalid_separator_err!("eat_delimited", SeparatorFault::OutOfRange);
/// ```
///
/// If the context is not provided, the current function name is used.
#[macro_export]
macro_rules! invalid_separator_err {
    ( $context:expr, $fault:expr $(,)? ) => {{
        $crate::invalid_separator_err($context, $fault)
    }};
    ( $fault:expr $(,)? ) => {{
        $crate::invalid_separator_err!($crate::function!(), $fault)
    }};
}

/// Creates a "not enough bytes" error.
///
/// If the context is not provided, the current function name is used.
#[macro_export]
macro_rules! not_enough_bytes_err {
    ( $context:expr, $received:expr , $expected:expr $(,)? ) => {{
        $crate::not_enough_bytes_err($context, $received, $expected)
    }};
    ( $received:expr , $expected:expr $(,)? ) => {{
        $crate::not_enough_bytes_err!($crate::function!(), $received, $expected)
    }};
}

/// Returns early with a "not enough bytes" error when fewer than `size` bytes remain in the cursor.
///
/// # Examples
///
/// ```
/// use bytecursor::{ensure_remaining, ByteCursor, CursorResult};
///
/// fn eat_header(cursor: &mut ByteCursor) -> CursorResult<Vec<u8>> {
///     ensure_remaining!(in: cursor, size: 8);
///     Ok(cursor.eat(8).unwrap_or_default())
/// }
/// ```
///
/// If the context is not provided, the current function name is used.
#[macro_export]
macro_rules! ensure_remaining {
    (ctx: $ctx:expr, in: $cursor:ident, size: $expected:expr) => {{
        let received = $cursor.remaining();
        let expected = $expected;
        if received < expected {
            return Err($crate::not_enough_bytes_err($ctx, received, expected));
        }
    }};
    (in: $cursor:ident, size: $expected:expr) => {{
        $crate::ensure_remaining!(ctx: $crate::function!(), in: $cursor, size: $expected)
    }};
}
