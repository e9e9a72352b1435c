use super::codec::number_to_string;
use std::rc::Rc;

/// Every variable holds a number. Strings only come from literals and
/// the `FIN`/`FOUT` functions, and can only be printed.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(Rc<str>),
}

impl Val {
    /// Strings coerce to zero.
    pub fn number(&self) -> f64 {
        match self {
            Val::Number(n) => *n,
            Val::String(_) => 0.0,
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Number(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", number_to_string(*n)),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
