use super::{ast::*, token::*, Column, Error, LineNumber};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(line_number: LineNumber, tokens: &[Token]) -> Result<Vec<Statement>> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Vec<Statement>> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
        };
        let mut r: Vec<Statement> = vec![];
        loop {
            match parse.peek() {
                None => return Ok(r),
                Some(Token::Semicolon) => {
                    parse.next();
                    continue;
                }
                Some(_) => {}
            }
            match parse.statement() {
                Ok(s) => r.push(s),
                Err(e) => return Err(e.in_column(&parse.col)),
            }
            match parse.next() {
                None | Some(Token::Semicolon) => {}
                Some(_) => {
                    return Err(error!(SyntaxError, ..&parse.col; "EXPECTED END OF STATEMENT"))
                }
            }
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn statement(&mut self) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => Statement::for_word(self, word),
            _ => Err(error!(SyntaxError; "EXPECTED COMMAND")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen(_)) => {
                    let expr = this.expression()?;
                    this.expect_rparen()?;
                    expr
                }
                Some(Token::Operator(Operator::Minus)) => {
                    let column = this.column();
                    let expr = parse(this, Expression::unary_precedence())?;
                    Expression::Operator(column, Opcode::Neg, vec![expr])
                }
                Some(Token::Operator(Operator::Plus)) => parse(this, Expression::unary_precedence())?,
                Some(Token::Ident(name)) => {
                    let column = this.column();
                    match this.peek() {
                        Some(Token::LParen(_)) if name.starts_with('F') => {
                            match Opcode::for_function(name) {
                                Some(opcode) => {
                                    Expression::Operator(column, opcode, this.expression_list()?)
                                }
                                None => return Err(error!(SyntaxError; "UNKNOWN FUNCTION")),
                            }
                        }
                        _ => Expression::Var(column.clone(), this.variable_named(column, name)?),
                    }
                }
                Some(Token::Literal(l)) => Expression::for_literal(this.column(), l)?,
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            let mut rhs;
            loop {
                match this.peek() {
                    Some(Token::Operator(op)) => {
                        let op_precedence = Expression::op_precedence(op);
                        if op_precedence < precedence {
                            break;
                        }
                        this.next();
                        let column = this.column();
                        rhs = parse(this, op_precedence + 1)?;
                        lhs = Expression::for_binary_op(column, op, lhs, rhs);
                    }
                    _ => break,
                }
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        match self.next() {
            Some(Token::LParen(_)) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED LEFT PARENTHESIS")),
        }
        let mut v: Vec<Expression> = vec![];
        if let Some(Token::RParen(_)) = self.peek() {
            self.next();
            return Ok(v);
        }
        loop {
            v.push(self.expression()?);
            match self.next() {
                Some(Token::RParen(_)) => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "EXPECTED END OR SEPARATOR")),
            }
        }
    }

    fn variable(&mut self) -> Result<Variable> {
        match self.next() {
            Some(Token::Ident(name)) => {
                let column = self.column();
                self.variable_named(column, name)
            }
            _ => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    fn variable_named(&mut self, column: Column, name: &str) -> Result<Variable> {
        let name: Rc<str> = name.into();
        if let Some(Token::LParen(_)) = self.peek() {
            let mut subscripts = self.expression_list()?;
            if subscripts.len() != 1 {
                return Err(error!(SyntaxError; "EXPECTED ONE SUBSCRIPT"));
            }
            if let Some(expr) = subscripts.pop() {
                return Ok(Variable::Array(column, name, Box::new(expr)));
            }
        }
        Ok(Variable::Unary(column, name))
    }

    fn printer_list(&mut self) -> Result<Vec<PrintItem>> {
        let mut v: Vec<PrintItem> = vec![];
        loop {
            match self.peek() {
                None | Some(Token::Semicolon) => return Ok(v),
                Some(Token::Comma) => {
                    self.next();
                }
                Some(Token::Bang) => {
                    self.next();
                    v.push(PrintItem::Newline(self.column()));
                }
                Some(Token::Hash) => {
                    self.next();
                    v.push(PrintItem::Return(self.column()));
                }
                Some(Token::Colon) => {
                    self.next();
                    v.push(PrintItem::Tab(self.column()));
                }
                Some(Token::Percent) => {
                    self.next();
                    let mut column = self.column();
                    let format = match self.peek() {
                        Some(Token::Literal(Literal::Number(s))) => {
                            let s = s.clone();
                            self.next();
                            column.end = self.column().end;
                            Expression::parse_number(&s)?
                        }
                        _ => 0.0,
                    };
                    v.push(PrintItem::Format(column, format));
                }
                _ => v.push(PrintItem::Expression(self.expression()?)),
            };
        }
    }

    fn line_target(&mut self) -> Result<Option<f64>> {
        match self.peek() {
            Some(Token::Literal(Literal::Number(s))) => {
                let s = s.clone();
                self.next();
                Ok(Some(Expression::parse_number(&s)?))
            }
            None | Some(Token::Comma) | Some(Token::Semicolon) => Ok(None),
            _ => Err(error!(SyntaxError; "EXPECTED LINE NUMBER")),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) | Word(_) => {"UNEXPECTED TOKEN"}
                Literal(_) => {"EXPECTED LITERAL"}
                Operator(_) => {"EXPECTED OPERATOR"}
                Ident(_) => {"EXPECTED VARIABLE"}
                LParen(_) => {"EXPECTED LEFT PARENTHESIS"}
                RParen(_) => {"EXPECTED RIGHT PARENTHESIS"}
                Comma => {"EXPECTED COMMA"}
                Semicolon => {"EXPECTED SEMICOLON"}
                Bang | Hash | Colon | Percent | Dollar => {"UNEXPECTED TOKEN"}
            }
        ))
    }

    fn expect_rparen(&mut self) -> Result<()> {
        match self.next() {
            Some(Token::RParen(_)) => Ok(()),
            _ => Err(error!(SyntaxError; "EXPECTED RIGHT PARENTHESIS")),
        }
    }

    fn skip_to_end(&mut self) {
        while let Some(t) = self.peek() {
            if let Token::Semicolon = t {
                break;
            }
            self.next();
        }
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let opcode = match op {
            Caret => Opcode::Pow,
            Multiply => Opcode::Mul,
            Divide => Opcode::Div,
            Plus => Opcode::Add,
            Minus => Opcode::Sub,
            Equal => Opcode::Eq,
        };
        Expression::Operator(col, opcode, vec![lhs, rhs])
    }

    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Equal => 0,
            Plus | Minus => 10,
            Multiply | Divide => 20,
            Caret => 30,
        }
    }

    fn unary_precedence() -> usize {
        25
    }

    fn parse_number(s: &str) -> Result<f64> {
        match s.parse::<f64>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(SyntaxError; "INVALID NUMBER")),
        }
    }

    fn for_literal(col: Column, lit: &Literal) -> Result<Expression> {
        match lit {
            Literal::Number(s) => Ok(Expression::Number(col, Expression::parse_number(s)?)),
            Literal::Encoded(s) => Ok(Expression::Encoded(col, s.as_str().into())),
            Literal::String(s) => Ok(Expression::String(col, s.as_str().into())),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: &Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            Ask(_) => Self::r#ask(parse, column),
            Comment(_) => Self::r#comment(parse, column),
            Do(_) => Self::r#do(parse, column),
            Erase(_) => Self::r#erase(parse, column),
            For(_) => Self::r#for(parse, column),
            Goto(_) => Self::r#goto(parse, column),
            If(_) => Self::r#if(parse, column),
            Quit(_) => Ok(Statement::Quit(column)),
            Return(_) => Ok(Statement::Return(column)),
            Set(_) => Self::r#set(parse, column),
            Type(_) => Self::r#type(parse, column),
            Library(_) | Modify(_) | Operate(_) | Write(_) => {
                parse.skip_to_end();
                Ok(Statement::Unimplemented(column, word.clone()))
            }
        }
    }

    fn r#ask(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Ask(column, parse.printer_list()?))
    }

    fn r#comment(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Token::Unknown(_)) = parse.peek() {
            parse.next();
        }
        Ok(Statement::Comment(column))
    }

    fn r#do(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Do(column, parse.expression()?))
    }

    fn r#erase(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Token::Ident(_)) = parse.peek() {
            parse.next();
        }
        Ok(Statement::Erase(column))
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let begin = parse.expression()?;
        parse.expect(Token::Comma)?;
        let second = parse.expression()?;
        if let Some(Token::Comma) = parse.peek() {
            parse.next();
            let end = parse.expression()?;
            return Ok(Statement::For(column, var, begin, end, Some(second)));
        }
        Ok(Statement::For(column, var, begin, second, None))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        match parse.peek() {
            None | Some(Token::Semicolon) => Ok(Statement::Goto(column, None)),
            _ => Ok(Statement::Goto(column, Some(parse.expression()?))),
        }
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let condition = parse.expression()?;
        let mut targets = [None, None, None];
        for (index, target) in targets.iter_mut().enumerate() {
            if index > 0 {
                match parse.peek() {
                    Some(Token::Comma) => {
                        parse.next();
                    }
                    _ => break,
                }
            }
            *target = parse.line_target()?;
        }
        let [less, zero, more] = targets;
        Ok(Statement::If(column, condition, less, zero, more))
    }

    fn r#set(parse: &mut Parser, column: Column) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Set(column, var, expr))
    }

    fn r#type(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Token::Dollar) = parse.peek() {
            parse.next();
            return Ok(Statement::Varlist(column));
        }
        Ok(Statement::Type(column, parse.printer_list()?))
    }
}
