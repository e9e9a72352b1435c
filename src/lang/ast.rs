use super::Column;
use super::Word;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum Statement {
    Ask(Column, Vec<PrintItem>),
    Comment(Column),
    Do(Column, Expression),
    Erase(Column),
    /// Index, begin, end, optional step.
    For(Column, Variable, Expression, Expression, Option<Expression>),
    Goto(Column, Option<Expression>),
    /// Condition then the negative, zero and positive targets.
    If(Column, Expression, Option<f64>, Option<f64>, Option<f64>),
    Quit(Column),
    Return(Column),
    Set(Column, Variable, Expression),
    Type(Column, Vec<PrintItem>),
    Varlist(Column),
    Unimplemented(Column, Word),
}

#[derive(Debug, PartialEq)]
pub enum PrintItem {
    Expression(Expression),
    Newline(Column),
    Return(Column),
    Tab(Column),
    /// Width and precision as one number, `6.2` or `8.04`.
    Format(Column, f64),
}

/// FOCAL has one dimension and no DIM. `A` and `A(0)` are the same cell.
#[derive(Debug, PartialEq)]
pub enum Variable {
    Unary(Column, Rc<str>),
    Array(Column, Rc<str>, Box<Expression>),
}

impl Variable {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Variable::Unary(_, name) | Variable::Array(_, name, _) => name,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(Column, f64),
    String(Column, Rc<str>),
    /// A numeral in the 6-bit character code, like `0YES`.
    Encoded(Column, Rc<str>),
    Var(Column, Variable),
    Operator(Column, Opcode, Vec<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Opcode {
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Eq,
    Abs,
    Atn,
    Com,
    Cos,
    Exp,
    In,
    Itr,
    Log,
    New,
    Out,
    Ran,
    Sgn,
    Sin,
    Sqt,
}

impl Opcode {
    pub fn for_function(name: &str) -> Option<Opcode> {
        use Opcode::*;
        match name {
            "FABS" => Some(Abs),
            "FATN" => Some(Atn),
            "FCOM" => Some(Com),
            "FCOS" => Some(Cos),
            "FEXP" => Some(Exp),
            "FIN" => Some(In),
            "FITR" => Some(Itr),
            "FLOG" => Some(Log),
            "FNEW" => Some(New),
            "FOUT" => Some(Out),
            "FRAN" => Some(Ran),
            "FSGN" => Some(Sgn),
            "FSIN" => Some(Sin),
            "FSQT" => Some(Sqt),
            _ => None,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Neg => write!(f, "NEG"),
            Add => write!(f, "+"),
            Sub => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            Pow => write!(f, "^"),
            Eq => write!(f, "="),
            Abs => write!(f, "FABS"),
            Atn => write!(f, "FATN"),
            Com => write!(f, "FCOM"),
            Cos => write!(f, "FCOS"),
            Exp => write!(f, "FEXP"),
            In => write!(f, "FIN"),
            Itr => write!(f, "FITR"),
            Log => write!(f, "FLOG"),
            New => write!(f, "FNEW"),
            Out => write!(f, "FOUT"),
            Ran => write!(f, "FRAN"),
            Sgn => write!(f, "FSGN"),
            Sin => write!(f, "FSIN"),
            Sqt => write!(f, "FSQT"),
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_print_item(&mut self, _: &PrintItem) {}
    fn visit_variable(&mut self, _: &Variable) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Variable {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if let Variable::Array(_, _, expr) = self {
            expr.accept(visitor);
        }
        visitor.visit_variable(self)
    }
}

impl AcceptVisitor for PrintItem {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        if let PrintItem::Expression(expr) = self {
            expr.accept(visitor);
        }
        visitor.visit_print_item(self)
    }
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Comment(_) | Erase(_) | Quit(_) | Return(_) | Varlist(_) | Unimplemented(..) => {}
            Ask(_, items) | Type(_, items) => {
                for item in items {
                    item.accept(visitor);
                }
            }
            Do(_, expr) | If(_, expr, ..) => expr.accept(visitor),
            Goto(_, expr) => {
                if let Some(expr) = expr {
                    expr.accept(visitor);
                }
            }
            For(_, var, begin, end, step) => {
                var.accept(visitor);
                begin.accept(visitor);
                end.accept(visitor);
                if let Some(step) = step {
                    step.accept(visitor);
                }
            }
            Set(_, var, expr) => {
                var.accept(visitor);
                expr.accept(visitor);
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Number(..) | String(..) | Encoded(..) => {}
            Var(_, var) => var.accept(visitor),
            Operator(_, _, exprs) => {
                for expr in exprs {
                    expr.accept(visitor);
                }
            }
        }
        visitor.visit_expression(self)
    }
}
