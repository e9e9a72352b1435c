use super::Program;
use crate::lang::ast::{AcceptVisitor, Expression, Opcode, Statement, Variable, Visitor};
use crate::lang::{line_string, split_line};
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Duration;

/// ## Program statistics
///
/// Counts taken from the line table of a program, plus the wall time and
/// statement count of its last run. `Display` gives the on-screen report
/// and [`Statistics::to_csv`] the file form.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Statistics {
    pub run_time: Duration,
    pub statements_executed: usize,
    pub lines: usize,
    pub first_line: u16,
    pub last_line: u16,
    pub statements: usize,
    /// Most statements on any one line.
    pub statements_max: usize,
    pub variables: usize,
    pub numbers: usize,
    pub numbers_non_int: usize,
    pub numbers_zero: usize,
    pub numbers_one: usize,
    pub strings: usize,
    pub strings_longest: usize,
    /// Constant targets of DO, GOTO and IF.
    pub branches: usize,
    pub dos: usize,
    pub gotos: usize,
    pub ifs: usize,
    pub forward: usize,
    pub backward: usize,
    pub same_line: usize,
    pub assign_zero: usize,
    pub assign_one: usize,
    pub assign_other: usize,
    pub fors: usize,
    pub fors_step_one: usize,
    pub increments: usize,
    pub decrements: usize,
}

impl Statistics {
    /// Returns `None` when the program has no lines.
    pub fn new(program: &Program) -> Option<Statistics> {
        let codes: Vec<u16> = program.line_codes().collect();
        let mut stats = Statistics {
            lines: codes.len(),
            first_line: *codes.first()?,
            last_line: *codes.last()?,
            statements: program.len(),
            statements_max: codes.iter().map(|c| program.line_len(*c)).max()?,
            ..Statistics::default()
        };
        let mut counter = Counter {
            stats: &mut stats,
            line: 0,
            names: BTreeSet::new(),
        };
        for addr in 0..program.len() {
            let line = program.line_for_statement(addr);
            if line < 0.0 {
                continue;
            }
            counter.line = code_of(line);
            if let Some(statement) = program.get(addr) {
                statement.accept(&mut counter);
            }
        }
        let variables = counter.names.len();
        stats.variables = variables;
        Some(stats)
    }

    pub fn statements_average(&self) -> f64 {
        self.statements as f64 / self.lines as f64
    }

    /// One `SECTION,label,value` row per count.
    pub fn to_csv(&self) -> String {
        let mut s = String::new();
        for (section, rows) in self.sections() {
            for (label, value) in rows {
                s.push_str(&format!("{},{},{}\n", section, label.trim(), value));
            }
        }
        s
    }

    fn sections(&self) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        vec![
            (
                "RUN",
                vec![
                    ("   time", format!("{}", self.run_time.as_secs_f64())),
                    ("   stmts", self.statements_executed.to_string()),
                ],
            ),
            (
                "LINE NUMBERS",
                vec![
                    ("  total", self.lines.to_string()),
                    ("  first", line_string(self.first_line)),
                    ("   last", line_string(self.last_line)),
                ],
            ),
            (
                "STATEMENTS",
                vec![
                    ("  total", self.statements.to_string()),
                    ("average", format!("{:.2}", self.statements_average())),
                    ("    max", self.statements_max.to_string()),
                ],
            ),
            ("VARIABLES", vec![("  total", self.variables.to_string())]),
            (
                "NUMERIC CONSTANTS",
                vec![
                    ("  total", self.numbers.to_string()),
                    ("non-int", self.numbers_non_int.to_string()),
                    ("    int", (self.numbers - self.numbers_non_int).to_string()),
                    ("  zeros", self.numbers_zero.to_string()),
                    ("   ones", self.numbers_one.to_string()),
                ],
            ),
            (
                "STRING CONSTANTS",
                vec![
                    ("  total", self.strings.to_string()),
                    ("biggest", self.strings_longest.to_string()),
                ],
            ),
            (
                "BRANCHES",
                vec![
                    ("  total", self.branches.to_string()),
                    ("    dos", self.dos.to_string()),
                    ("  gotos", self.gotos.to_string()),
                    ("    ifs", self.ifs.to_string()),
                    ("forward", self.forward.to_string()),
                    ("bckward", self.backward.to_string()),
                    ("same ln", self.same_line.to_string()),
                ],
            ),
            (
                "OTHER BITS",
                vec![
                    (" asgn 0", self.assign_zero.to_string()),
                    (" asgn 1", self.assign_one.to_string()),
                    (" asgn x", self.assign_other.to_string()),
                    ("   FORs", self.fors.to_string()),
                    (" step 1", self.fors_step_one.to_string()),
                    ("   incs", self.increments.to_string()),
                    ("   decs", self.decrements.to_string()),
                ],
            ),
        ]
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (section, rows) in self.sections() {
            write!(f, "\n{}\n\n", section)?;
            for (label, value) in rows {
                writeln!(f, "{}: {}", label, value)?;
            }
        }
        Ok(())
    }
}

fn code_of(line: f64) -> u16 {
    let (group, step) = split_line(line);
    (group * 100 + step) as u16
}

struct Counter<'a> {
    stats: &'a mut Statistics,
    line: u16,
    names: BTreeSet<Rc<str>>,
}

impl<'a> Counter<'a> {
    fn branch(&mut self, target: f64) {
        self.stats.branches += 1;
        if target < 0.0 {
            return;
        }
        let target = code_of(target);
        if target > self.line {
            self.stats.forward += 1;
        } else if target < self.line {
            self.stats.backward += 1;
        } else {
            self.stats.same_line += 1;
        }
    }

    fn step_by_one(&mut self, var: &Variable, expr: &Expression) {
        use Expression::{Number, Var};
        let (op, args) = match expr {
            Expression::Operator(_, op, args) => (op, args),
            _ => return,
        };
        let same = |other: &Variable| {
            matches!((var, other), (Variable::Unary(_, a), Variable::Unary(_, b)) if a == b)
        };
        match (op, args.as_slice()) {
            (Opcode::Add, [Var(_, v), Number(_, n)]) | (Opcode::Add, [Number(_, n), Var(_, v)])
                if *n == 1.0 && same(v) =>
            {
                self.stats.increments += 1
            }
            (Opcode::Sub, [Var(_, v), Number(_, n)]) if *n == 1.0 && same(v) => {
                self.stats.decrements += 1
            }
            _ => {}
        }
    }
}

impl<'a> Visitor for Counter<'a> {
    fn visit_statement(&mut self, statement: &Statement) {
        use Statement::*;
        match statement {
            Do(_, Expression::Number(_, target)) => {
                self.stats.dos += 1;
                self.branch(*target);
            }
            Goto(_, Some(Expression::Number(_, target))) => {
                self.stats.gotos += 1;
                self.branch(*target);
            }
            If(_, _, less, zero, more) => {
                for target in [less, zero, more].iter().copied().flatten() {
                    self.stats.ifs += 1;
                    self.branch(*target);
                }
            }
            For(_, _, _, _, step) => {
                self.stats.fors += 1;
                match step {
                    None => self.stats.fors_step_one += 1,
                    Some(Expression::Number(_, n)) if *n == 1.0 => self.stats.fors_step_one += 1,
                    _ => {}
                }
            }
            Set(_, var, expr) => {
                match expr {
                    Expression::Number(_, n) if *n == 0.0 => self.stats.assign_zero += 1,
                    Expression::Number(_, n) if *n == 1.0 => self.stats.assign_one += 1,
                    _ => self.stats.assign_other += 1,
                }
                self.step_by_one(var, expr);
            }
            _ => {}
        }
    }

    fn visit_variable(&mut self, var: &Variable) {
        self.names.insert(var.name().clone());
    }

    fn visit_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Number(_, n) => {
                self.stats.numbers += 1;
                if n.fract() != 0.0 {
                    self.stats.numbers_non_int += 1;
                } else if *n == 0.0 {
                    self.stats.numbers_zero += 1;
                } else if *n == 1.0 {
                    self.stats.numbers_one += 1;
                }
            }
            Expression::String(_, s) => {
                self.stats.strings += 1;
                self.stats.strings_longest = self.stats.strings_longest.max(s.chars().count());
            }
            _ => {}
        }
    }
}
