use crate::error;
use crate::lang::Error;
use std::collections::BTreeMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// A name starts as one cell and becomes a full array of
/// `LOWER..=UPPER` the first time it is subscripted. The scalar value
/// moves into subscript zero so `A` and `A(0)` stay the same cell.

pub const LOWER: i32 = -2048;
pub const UPPER: i32 = 2047;
const SIZE: usize = (UPPER - LOWER + 1) as usize;

#[derive(Debug, Default)]
pub struct Var {
    vars: BTreeMap<Rc<str>, Vec<f64>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &Rc<str>> {
        self.vars.keys()
    }

    pub fn is_array(&self, var_name: &str) -> bool {
        match self.vars.get(var_name) {
            Some(cells) => cells.len() > 1,
            None => false,
        }
    }

    pub fn declare(&mut self, var_name: &Rc<str>, subscripted: bool) {
        let cells = self
            .vars
            .entry(var_name.clone())
            .or_insert_with(|| vec![0.0]);
        if subscripted && cells.len() == 1 {
            let scalar = cells[0];
            let mut array = vec![0.0; SIZE];
            array[Var::offset(0)] = scalar;
            *cells = array;
        }
    }

    /// Checks a computed subscript against the array bounds.
    pub fn subscript(value: f64) -> Result<i32> {
        if value.is_nan() || value < LOWER as f64 || value > UPPER as f64 {
            return Err(error!(SubscriptOutOfRange));
        }
        Ok(value as i32)
    }

    pub fn fetch(&mut self, var_name: &Rc<str>, subscript: Option<i32>) -> f64 {
        let index = self.index(var_name, subscript);
        match self.vars.get(var_name) {
            Some(cells) => cells.get(index).copied().unwrap_or(0.0),
            None => 0.0,
        }
    }

    pub fn store(&mut self, var_name: &Rc<str>, subscript: Option<i32>, value: f64) {
        let index = self.index(var_name, subscript);
        if let Some(cell) = self.vars.get_mut(var_name).and_then(|c| c.get_mut(index)) {
            *cell = value;
        }
    }

    fn index(&mut self, var_name: &Rc<str>, subscript: Option<i32>) -> usize {
        self.declare(var_name, subscript.is_some());
        let is_array = self.is_array(var_name);
        match subscript {
            None if !is_array => 0,
            None => Var::offset(0),
            Some(s) => Var::offset(s),
        }
    }

    fn offset(subscript: i32) -> usize {
        (subscript.max(LOWER).min(UPPER) - LOWER) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_becomes_array() {
        let mut v = Var::new();
        let a: Rc<str> = "A".into();
        v.store(&a, None, 5.0);
        assert!(!v.is_array("A"));
        assert_eq!(v.fetch(&a, Some(0)), 5.0);
        assert!(v.is_array("A"));
        v.store(&a, Some(-2048), 1.0);
        v.store(&a, Some(2047), 2.0);
        assert_eq!(v.fetch(&a, None), 5.0);
        assert_eq!(v.fetch(&a, Some(-2048)), 1.0);
        assert_eq!(v.fetch(&a, Some(2047)), 2.0);
    }

    #[test]
    fn test_subscript_bounds() {
        assert_eq!(Var::subscript(2047.0), Ok(2047));
        assert_eq!(Var::subscript(-2048.0), Ok(-2048));
        assert_eq!(Var::subscript(3.7), Ok(3));
        assert!(Var::subscript(2048.0).is_err());
        assert!(Var::subscript(-2049.0).is_err());
    }

    #[test]
    fn test_names_sorted() {
        let mut v = Var::new();
        for name in &["Z", "B", "A"] {
            v.declare(&(*name).into(), false);
        }
        let names: Vec<String> = v.names().map(|n| n.to_string()).collect();
        assert_eq!(names, ["A", "B", "Z"]);
        v.clear();
        assert!(v.is_empty());
    }
}
