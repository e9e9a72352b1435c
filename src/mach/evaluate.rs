use super::codec::string_to_number;
use super::{Function, Operation, Val, Var};
use crate::error;
use crate::lang::ast::{Expression, Opcode, Variable};
use crate::lang::Error;
use rand::rngs::StdRng;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A storage cell named by a variable reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub name: Rc<str>,
    pub subscript: Option<i32>,
}

/// Computes values against the variable store. Nothing here fails: each
/// problem is collected as a diagnostic and a zero is used instead.
pub struct Evaluator<'a> {
    vars: &'a mut Var,
    rng: &'a mut StdRng,
    running: bool,
    errors: Vec<Error>,
}

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a mut Var, rng: &'a mut StdRng, running: bool) -> Evaluator<'a> {
        Evaluator {
            vars,
            rng,
            running,
            errors: vec![],
        }
    }

    /// Diagnostics raised so far, oldest first.
    pub fn finish(self) -> Vec<Error> {
        self.errors
    }

    /// Creates storage for the name if needed. Before the program runs
    /// this only registers the name and there is no cell to return.
    pub fn resolve(&mut self, var: &Variable) -> Option<Slot> {
        match var {
            Variable::Unary(_, name) => {
                self.vars.declare(name, false);
                if !self.running {
                    return None;
                }
                Some(Slot {
                    name: name.clone(),
                    subscript: None,
                })
            }
            Variable::Array(_, name, expr) => {
                self.vars.declare(name, true);
                if !self.running {
                    return None;
                }
                let value = self.evaluate(expr).number();
                let subscript = match Var::subscript(value) {
                    Ok(subscript) => subscript,
                    Err(error) => {
                        self.errors.push(error);
                        0
                    }
                };
                Some(Slot {
                    name: name.clone(),
                    subscript: Some(subscript),
                })
            }
        }
    }

    pub fn fetch(&mut self, var: &Variable) -> f64 {
        match self.resolve(var) {
            Some(slot) => self.vars.fetch(&slot.name, slot.subscript),
            None => 0.0,
        }
    }

    pub fn store(&mut self, slot: &Slot, value: f64) {
        self.vars.store(&slot.name, slot.subscript, value);
    }

    pub fn evaluate(&mut self, expr: &Expression) -> Val {
        match expr {
            Expression::Number(_, n) => Val::Number(*n),
            Expression::String(_, s) => Val::String(s.clone()),
            Expression::Encoded(_, s) => match string_to_number(s) {
                Ok(n) => Val::Number(n),
                Err(error) => {
                    self.errors.push(error);
                    Val::Number(0.0)
                }
            },
            Expression::Var(_, var) => Val::Number(self.fetch(var)),
            Expression::Operator(_, opcode, operands) => {
                let args: Vec<Val> = operands.iter().map(|e| self.evaluate(e)).collect();
                match self.apply(*opcode, args) {
                    Ok(val) => val,
                    Err(error) => {
                        self.errors.push(error);
                        Val::Number(0.0)
                    }
                }
            }
        }
    }

    fn apply(&mut self, opcode: Opcode, args: Vec<Val>) -> Result<Val> {
        use Opcode::*;
        let mut args = args.into_iter();
        match (args.next(), args.next(), args.next()) {
            (None, _, _) => match opcode {
                Ran => Function::ran(&mut *self.rng),
                _ => Err(unhandled(opcode)),
            },
            (Some(a), None, _) => match opcode {
                Neg => Operation::negate(a),
                Abs => Function::abs(a),
                Atn => Function::atn(a),
                Cos => Function::cos(a),
                Exp => Function::exp(a),
                Itr => Function::itr(a),
                Log => Function::log(a),
                Sin => Function::sin(a),
                Sqt => Function::sqt(a),
                Sgn => Function::sgn(a),
                In => Function::fin(a),
                Out => Function::fout(a),
                New | Com => Function::stub(a),
                Add | Sub | Mul | Div | Pow | Eq | Ran => Err(unhandled(opcode)),
            },
            (Some(a), Some(b), None) => match opcode {
                Add => Operation::sum(a, b),
                Sub => Operation::subtract(a, b),
                Mul => Operation::multiply(a, b),
                Div => {
                    if b.number() == 0.0 {
                        self.errors.push(error!(DivisionByZero));
                    }
                    Operation::divide(a, b)
                }
                Pow => Operation::power(a, b),
                Eq => Operation::equal(a, b),
                _ => Err(unhandled(opcode)),
            },
            _ => Err(unhandled(opcode)),
        }
    }
}

fn unhandled(opcode: Opcode) -> Error {
    error!(UnhandledFunction; &opcode.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn num(n: f64) -> Expression {
        Expression::Number(0..0, n)
    }

    fn op(opcode: Opcode, args: Vec<Expression>) -> Expression {
        Expression::Operator(0..0, opcode, args)
    }

    #[test]
    fn test_arity_mismatch_is_zero() {
        let mut vars = Var::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut e = Evaluator::new(&mut vars, &mut rng, true);
        assert_eq!(e.evaluate(&op(Opcode::Sin, vec![])), Val::Number(0.0));
        assert_eq!(e.evaluate(&op(Opcode::Add, vec![num(1.0)])), Val::Number(0.0));
        let errors = e.finish();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "UNHANDLED FUNCTION; FSIN");
    }

    #[test]
    fn test_divide_by_zero_still_divides() {
        let mut vars = Var::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut e = Evaluator::new(&mut vars, &mut rng, true);
        let val = e.evaluate(&op(Opcode::Div, vec![num(1.0), num(0.0)]));
        assert_eq!(val, Val::Number(f64::INFINITY));
        assert_eq!(e.finish()[0].to_string(), "DIVISION BY ZERO");
    }

    #[test]
    fn test_not_running_only_registers() {
        let mut vars = Var::new();
        let mut rng = StdRng::seed_from_u64(1);
        let var = Variable::Array(0..0, "A".into(), Box::new(num(5000.0)));
        let mut e = Evaluator::new(&mut vars, &mut rng, false);
        assert_eq!(e.resolve(&var), None);
        assert!(e.finish().is_empty());
        assert!(vars.is_array("A"));
    }

    #[test]
    fn test_subscript_out_of_range_uses_zero() {
        let mut vars = Var::new();
        let mut rng = StdRng::seed_from_u64(1);
        let var = Variable::Array(0..0, "A".into(), Box::new(num(5000.0)));
        let mut e = Evaluator::new(&mut vars, &mut rng, true);
        let slot = e.resolve(&var);
        assert_eq!(
            slot,
            Some(Slot {
                name: "A".into(),
                subscript: Some(0)
            })
        );
        assert_eq!(e.finish()[0].to_string(), "SUBSCRIPT OUT OF RANGE");
    }

    #[test]
    fn test_encoded_literal() {
        let mut vars = Var::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut e = Evaluator::new(&mut vars, &mut rng, true);
        let val = e.evaluate(&Expression::Encoded(0..0, "0A1".into()));
        assert_eq!(val, Val::Number(11.0));
    }
}
