use super::ast::*;
use super::*;

mod lex_test;

fn parse_str(s: &str) -> Result<Vec<Statement>, Error> {
    let (line_number, tokens) = lex(s);
    parse(line_number, &tokens)
}

fn parse_one(s: &str) -> Option<Statement> {
    match parse_str(s) {
        Ok(mut v) => v.pop(),
        Err(_) => None,
    }
}
