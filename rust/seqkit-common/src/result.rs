pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_op(predicate: bool, name: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(crate::error::Error::invalid_operation(name))
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::Error::invalid_arg(name, condition))
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::{verify_arg, verify_op};

    fn checked_div(a: u32, b: u32) -> crate::Result<u32> {
        verify_arg!(b, b != 0);
        Ok(a / b)
    }

    fn pop(len: usize) -> crate::Result<usize> {
        verify_op!(pop, len > 0);
        Ok(len - 1)
    }

    #[test]
    fn verify_arg_passes_through() {
        assert_eq!(checked_div(10, 2).unwrap(), 5);
    }

    #[test]
    fn verify_arg_reports_name_and_condition() {
        let err = checked_div(1, 0).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "b");
                assert_eq!(message, "b != 0");
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
        assert_eq!(err.to_string(), "invalid argument b: b != 0");
    }

    #[test]
    fn verify_op_reports_operation() {
        assert_eq!(pop(2).unwrap(), 1);
        let err = pop(0).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidOperation { name } if name == "pop"));
    }
}
