use super::{Address, Listing};
use crate::error;
use crate::lang::{ast::Statement, line_string, split_line, Error, MAX_LINE};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program line table
///
/// Every statement of every line, in line order, as one sequence. A slot
/// per line code points at where that line starts in the sequence.

#[derive(Debug)]
pub struct Program {
    statements: Vec<Rc<Statement>>,
    lines: Vec<Option<Address>>,
    starts: Vec<(Address, u16)>,
    errors: Vec<Error>,
}

impl Default for Program {
    fn default() -> Self {
        Program {
            statements: vec![],
            lines: vec![None; MAX_LINE as usize],
            starts: vec![],
            errors: vec![],
        }
    }
}

impl Program {
    pub fn new(listing: &Listing) -> Program {
        let mut program = Program::default();
        for line in listing.lines() {
            let number = match line.number() {
                Some(number) => number,
                None => continue,
            };
            match line.ast() {
                Ok(statements) => {
                    if statements.is_empty() {
                        continue;
                    }
                    let start = program.statements.len();
                    program.lines[number as usize] = Some(start);
                    program.starts.push((start, number));
                    program
                        .statements
                        .extend(statements.into_iter().map(Rc::new));
                }
                Err(error) => program.errors.push(error),
            }
        }
        program
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Rc<Statement>> {
        self.statements.get(addr)
    }

    /// Line codes that hold statements, ascending.
    pub fn line_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.starts.iter().map(|(_, code)| *code)
    }

    /// Statements on the given line.
    pub fn line_len(&self, code: u16) -> usize {
        match self.starts.binary_search_by_key(&code, |(_, c)| *c) {
            Ok(index) => {
                let start = self.starts[index].0;
                let end = match self.starts.get(index + 1) {
                    Some((next, _)) => *next,
                    None => self.statements.len(),
                };
                end - start
            }
            Err(_) => 0,
        }
    }

    pub fn line_code_for(&self, addr: Address) -> Option<u16> {
        if addr >= self.statements.len() {
            return None;
        }
        match self.starts.binary_search_by_key(&addr, |(a, _)| *a) {
            Ok(index) => Some(self.starts[index].1),
            Err(0) => None,
            Err(index) => Some(self.starts[index - 1].1),
        }
    }

    /// The real line number holding a statement, `-1.0` when it has none.
    pub fn line_for_statement(&self, addr: Address) -> f64 {
        match self.line_code_for(addr) {
            Some(code) => code as f64 / 100.0,
            None => -1.0,
        }
    }

    /// Resolves a DO or GOTO target. A whole number names a group and
    /// finds its first line.
    pub fn find_line(&self, target: f64) -> Result<Address> {
        let (group, step) = split_line(target);
        if target < 0.0 {
            if step == 0 {
                return Err(error!(NegativeLine; &format!("GROUP {}", group)));
            }
            return Err(error!(NegativeLine; &format!("LINE {}", target)));
        }
        if !target.is_finite() || step >= 100 || group >= (MAX_LINE / 100) as i32 {
            return Err(error!(UndefinedLine; &format!("LINE {}", target)));
        }
        let base = (group * 100) as usize;
        if step != 0 {
            let code = base + step as usize;
            return match self.lines[code] {
                Some(addr) => Ok(addr),
                None => Err(error!(UndefinedLine; &line_string(code as u16))),
            };
        }
        match self.lines[base..base + 100].iter().flatten().next() {
            Some(addr) => Ok(*addr),
            None => Err(error!(UndefinedLine; &format!("GROUP {}", group))),
        }
    }
}
