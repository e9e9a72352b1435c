/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of FOCAL.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use token::{Literal, Operator, Token, Word};

pub mod ast;

#[cfg(test)]
mod tests;

/// Line code `group*100+step`. `None` is a direct (unnumbered) line.
pub type LineNumber = Option<u16>;
pub type Column = std::ops::Range<usize>;

/// Line codes are always less than this. Highest line is 31.99.
pub const MAX_LINE: u16 = 3200;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        MAX_LINE - 1
    }
}

/// Splits a real line number like `2.1` into group 2 and step 10.
pub fn split_line(target: f64) -> (i32, i32) {
    let group = target.trunc();
    let step = ((target - group) * 100.0).round();
    (group as i32, step as i32)
}

/// Renders a line code the way FOCAL lists it, `1.10` or `12.05`.
pub fn line_string(code: u16) -> String {
    format!("{}.{:02}", code / 100, code % 100)
}
