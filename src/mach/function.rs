use super::codec::number_to_string;
use super::Val;
use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// The `F` functions.
pub struct Function {}

impl Function {
    pub fn abs(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().abs()))
    }

    pub fn atn(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().atan()))
    }

    pub fn cos(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().cos()))
    }

    pub fn exp(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().exp()))
    }

    /// Integer part, toward negative infinity.
    pub fn itr(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().floor()))
    }

    pub fn log(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().ln()))
    }

    pub fn sin(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().sin()))
    }

    pub fn sqt(val: Val) -> Result<Val> {
        Ok(Val::Number(val.number().sqrt()))
    }

    pub fn sgn(val: Val) -> Result<Val> {
        let n = val.number();
        Ok(Val::Number(if n < 0.0 {
            -1.0
        } else if n > 0.0 {
            1.0
        } else {
            0.0
        }))
    }

    /// Character with the given code.
    pub fn fin(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) if (0.0..256.0).contains(&n) => {
                Ok(Val::String(char::from(n as u8).to_string().into()))
            }
            Val::Number(_) => Err(error!(InvalidString; "CHARACTER CODE")),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    pub fn fout(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Val::String(number_to_string(n).into())),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    /// FNEW and FCOM drove hardware that no longer exists.
    pub fn stub(_val: Val) -> Result<Val> {
        Ok(Val::Number(0.0))
    }

    pub fn ran<R: Rng>(rng: &mut R) -> Result<Val> {
        Ok(Val::Number(rng.gen::<f64>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sgn() {
        assert_eq!(Function::sgn((-3.0).into()), Ok(Val::Number(-1.0)));
        assert_eq!(Function::sgn(0.0.into()), Ok(Val::Number(0.0)));
        assert_eq!(Function::sgn(7.5.into()), Ok(Val::Number(1.0)));
    }

    #[test]
    fn test_itr_floors() {
        assert_eq!(Function::itr(2.7.into()), Ok(Val::Number(2.0)));
        assert_eq!(Function::itr((-2.5).into()), Ok(Val::Number(-3.0)));
    }

    #[test]
    fn test_strings() {
        assert_eq!(Function::fin(65.0.into()), Ok(Val::from("A")));
        assert_eq!(Function::fout(5.0.into()), Ok(Val::from(" 5")));
        assert!(Function::fout("A".into()).is_err());
    }

    #[test]
    fn test_ran_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let n = Function::ran(&mut rng).unwrap().number();
            assert!((0.0..1.0).contains(&n));
        }
    }
}
