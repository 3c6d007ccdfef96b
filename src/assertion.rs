// the one check the program makes, plus the truthiness rules
// that decide what counts as a failed check for non-bool values.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Assertion failed")]
pub struct AssertionError;

pub fn check(value: bool) -> Result<(), AssertionError> {
    if value {
        log::debug!("assertion passed");
        Ok(())
    } else {
        Err(AssertionError)
    }
}

/// Values that can stand in for a condition.
///
/// Zero, NaN, empty strings, `None`, `()` and `false` are falsy;
/// everything else is truthy. `Some(v)` is as truthy as `v` itself,
/// so `Some(0)` fails like `0` does.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! nonzero_is_truthy {
    ($($t:ty)*) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    }
}

nonzero_is_truthy!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        !(*self == 0.0 || self.is_nan())
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        !(*self == 0.0 || self.is_nan())
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, |v| v.is_truthy())
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

pub fn assert_truthy<T: Truthy>(value: T) -> Result<(), AssertionError> {
    check(value.is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn true_passes_silently() {
        assert_eq!(check(true), Ok(()));
    }

    #[test]
    fn false_fails() {
        let err = check(false).unwrap_err();
        assert_eq!(err, AssertionError);
        assert_eq!(err.to_string(), "Assertion failed");
    }

    #[test]
    fn truthy_values_pass() {
        assert_eq!(assert_truthy(1), Ok(()));
        assert_eq!(assert_truthy(-3i64), Ok(()));
        assert_eq!(assert_truthy(true), Ok(()));
        assert_eq!(assert_truthy("nonempty"), Ok(()));
        assert_eq!(assert_truthy(String::from("x")), Ok(()));
        assert_eq!(assert_truthy(0.5), Ok(()));
        assert_eq!(assert_truthy(Some(1)), Ok(()));
        assert_eq!(assert_truthy(Some("x")), Ok(()));
    }

    #[test]
    fn falsy_values_fail() {
        assert_eq!(assert_truthy(0), Err(AssertionError));
        assert_eq!(assert_truthy(0u64), Err(AssertionError));
        assert_eq!(assert_truthy(false), Err(AssertionError));
        assert_eq!(assert_truthy(""), Err(AssertionError));
        assert_eq!(assert_truthy(String::new()), Err(AssertionError));
        assert_eq!(assert_truthy(0.0), Err(AssertionError));
        assert_eq!(assert_truthy(f64::NAN), Err(AssertionError));
        assert_eq!(assert_truthy(None::<u32>), Err(AssertionError));
        assert_eq!(assert_truthy(Some(0)), Err(AssertionError));
        assert_eq!(assert_truthy(Some("")), Err(AssertionError));
        assert_eq!(assert_truthy(()), Err(AssertionError));
    }
}
