use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Arithmetic. Strings count as zero everywhere except `+` and `=`,
/// which refuse them.
pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        Ok(Val::Number(-val.number()))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number() - rhs.number()))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number() * rhs.number()))
    }

    /// Division by zero gives the IEEE result. Reporting it is up to the
    /// caller, which still wants the value.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number() / rhs.number()))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number().powf(rhs.number())))
    }

    /// True is -1.
    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(if l == r { -1.0 } else { 0.0 })),
            _ => Err(error!(TypeMismatch)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_refuses_strings() {
        assert_eq!(Operation::sum(2.0.into(), 3.0.into()), Ok(Val::Number(5.0)));
        assert!(Operation::sum("A".into(), 3.0.into()).is_err());
    }

    #[test]
    fn test_strings_coerce() {
        assert_eq!(Operation::multiply("A".into(), 3.0.into()), Ok(Val::Number(0.0)));
        assert_eq!(Operation::subtract(3.0.into(), "A".into()), Ok(Val::Number(3.0)));
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(
            Operation::divide(1.0.into(), 0.0.into()),
            Ok(Val::Number(f64::INFINITY))
        );
    }

    #[test]
    fn test_equal() {
        assert_eq!(Operation::equal(2.0.into(), 2.0.into()), Ok(Val::Number(-1.0)));
        assert_eq!(Operation::equal(2.0.into(), 3.0.into()), Ok(Val::Number(0.0)));
        assert!(Operation::equal("A".into(), 3.0.into()).is_err());
    }
}
