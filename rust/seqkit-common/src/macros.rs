/// Verifies an argument condition, returning `ErrorKind::InvalidArgument`
/// from the enclosing function when it does not hold.
///
/// The enclosing function must return `seqkit_common::Result<_>` (or a result
/// whose error type converts from `seqkit_common::error::Error`).
///
/// ```
/// use seqkit_common::{Result, verify_arg};
///
/// fn take(len: usize, count: usize) -> Result<usize> {
///     verify_arg!(count, count <= len);
///     Ok(count)
/// }
///
/// assert!(take(3, 2).is_ok());
/// assert!(take(3, 4).is_err());
/// ```
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Verifies a state condition, returning `ErrorKind::InvalidOperation`
/// from the enclosing function when it does not hold.
#[macro_export]
macro_rules! verify_op {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_op(result, stringify!($name))?;
    }};
}
