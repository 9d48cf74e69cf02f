use crate::error::Error;
use crate::Value;

/// Add two numeric values, validating both before any arithmetic.
///
/// Null arguments are rejected first, then non-numeric types, then NaN;
/// the sum is only computed once both operands are known-good.
pub fn add_numbers(a: &Value, b: &Value) -> Result<f64, Error> {
    if a.is_null() || b.is_null() {
        return Err(Error::MissingArgument);
    }

    let x = a
        .as_number()
        .ok_or(Error::ExpectedNumber(a.type_name()))?;
    let y = b
        .as_number()
        .ok_or(Error::ExpectedNumber(b.type_name()))?;

    if x.is_nan() || y.is_nan() {
        return Err(Error::NotANumber);
    }

    Ok(x + y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_sum() {
        assert_eq!(add_numbers(&Value::from(5i64), &Value::from(3i64)).unwrap(), 8.0);
        assert_eq!(add_numbers(&Value::from(2.5), &Value::from(0.5)).unwrap(), 3.0);
        assert_eq!(add_numbers(&Value::from(-1i64), &Value::from(1i64)).unwrap(), 0.0);
    }

    #[test]
    fn test_null_rejected_before_type_check() {
        let err = add_numbers(&Value::from(5i64), &Value::Null).unwrap_err();
        assert_eq!(err, Error::MissingArgument);
        assert_eq!(err.kind(), ErrorKind::Value);

        // Null wins even when the other argument is also invalid
        assert_eq!(
            add_numbers(&Value::Null, &Value::from("3")).unwrap_err(),
            Error::MissingArgument
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = add_numbers(&Value::from("5"), &Value::from(3i64)).unwrap_err();
        assert_eq!(err, Error::ExpectedNumber("string"));
        assert_eq!(err.kind(), ErrorKind::Type);

        assert_eq!(
            add_numbers(&Value::from(5i64), &Value::from(true)).unwrap_err(),
            Error::ExpectedNumber("boolean")
        );
    }

    #[test]
    fn test_nan_rejected() {
        let err = add_numbers(&Value::from(f64::NAN), &Value::from(1.0)).unwrap_err();
        assert_eq!(err, Error::NotANumber);
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_infinities_pass_validation() {
        // Only NaN is a rejected value; infinities add like any float
        assert_eq!(
            add_numbers(&Value::from(f64::INFINITY), &Value::from(1.0)).unwrap(),
            f64::INFINITY
        );
    }
}
