use super::{token::*, LineNumber, MaxValue};

pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    FocalLexer::lex(s)
}

fn is_focal_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_focal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_focal_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_focal_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut prev = ' ';
        loop {
            let ch = match self.chars().next() {
                Some(c) => c.to_ascii_uppercase(),
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            };
            s.push(ch);
            if let Some(pk) = self.chars().peek() {
                if is_focal_digit(*pk) || is_focal_alphabetic(*pk) || *pk == '.' {
                    prev = ch;
                    continue;
                }
                if ch == 'E' && (is_focal_digit(prev) || prev == '.') && (*pk == '+' || *pk == '-')
                {
                    prev = ch;
                    continue;
                }
            }
            break;
        }
        if s.parse::<f64>().is_ok() {
            Some(Token::Literal(Literal::Number(s)))
        } else {
            Some(Token::Literal(Literal::Encoded(s)))
        }
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            if let Some(ch) = self.chars().next() {
                if ch != '"' {
                    s.push(ch);
                    continue;
                }
            }
            return Some(Token::Literal(Literal::String(s)));
        }
    }

    fn alphabetic(&mut self) -> String {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_focal_alphabetic(*pk) && !is_focal_digit(*pk) {
                break;
            }
            if let Some(ch) = self.chars().next() {
                s.push(ch.to_ascii_uppercase());
            }
        }
        s
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        match Token::from_char(ch) {
            Some(t) => Some(t),
            None => Some(Token::Unknown(ch.to_string())),
        }
    }
}

struct FocalLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
    statement_start: bool,
}

impl<'a> Tokenizers<'a> for FocalLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for FocalLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if self.remark {
            return Some(Token::Unknown(self.chars.by_ref().collect::<String>()));
        }
        if is_focal_whitespace(pk) {
            return self.whitespace();
        }
        let statement_start = self.statement_start;
        self.statement_start = false;
        if is_focal_digit(pk) || pk == '.' {
            return self.number();
        }
        if is_focal_alphabetic(pk) {
            let s = self.alphabetic();
            if statement_start {
                if let Some(word) = Word::from_string(&s) {
                    if let Word::Comment(_) = word {
                        self.remark = true;
                    }
                    return Some(Token::Word(word));
                }
            }
            return Some(Token::Ident(s));
        }
        if pk == '"' {
            return self.string();
        }
        let minutia = self.minutia();
        if let Some(Token::Semicolon) = minutia {
            self.statement_start = true;
        }
        minutia
    }
}

impl<'a> FocalLexer<'a> {
    fn lex(s: &str) -> (LineNumber, Vec<Token>) {
        let (line_number, s) = FocalLexer::line_number(s);
        let mut tokens: Vec<Token> = FocalLexer {
            chars: s.chars().peekable(),
            remark: false,
            statement_start: true,
        }
        .collect();
        FocalLexer::trim_end(&mut tokens);
        (line_number, tokens)
    }

    /// Accepts `G.SS` where a single step digit counts as tens, so `1.1`
    /// is line `1.10`. A group without a step is not a line.
    fn line_number(s: &str) -> (LineNumber, &str) {
        let trimmed = s.trim_start();
        let len = trimmed
            .find(|c: char| !is_focal_digit(c) && c != '.')
            .unwrap_or_else(|| trimmed.len());
        let (number, rest) = trimmed.split_at(len);
        if number.is_empty() {
            return (None, s);
        }
        if let Some(ch) = rest.chars().next() {
            if !is_focal_whitespace(ch) {
                return (None, s);
            }
        }
        let mut parts = number.splitn(2, '.');
        let group = parts.next().unwrap_or("");
        let step = parts.next().unwrap_or("");
        if group.is_empty() || step.is_empty() || step.len() > 2 || step.contains('.') {
            return (None, s);
        }
        let group = match group.parse::<u16>() {
            Ok(g) => g,
            Err(_) => return (None, s),
        };
        let step = match step.parse::<u16>() {
            Ok(st) if step.len() == 1 => st * 10,
            Ok(st) => st,
            Err(_) => return (None, s),
        };
        if step == 0 || group > LineNumber::max_value() / 100 {
            return (None, s);
        }
        let code = group * 100 + step;
        if code > LineNumber::max_value() {
            return (None, s);
        }
        let mut rest = rest;
        if let Some(ch) = rest.chars().next() {
            if is_focal_whitespace(ch) {
                rest = &rest[ch.len_utf8()..];
            }
        }
        (Some(code), rest)
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
        if let Some(Token::Unknown(_)) = tokens.last() {
            if let Some(Token::Unknown(s)) = tokens.pop() {
                tokens.push(Token::Unknown(s.trim_end().to_string()));
            }
        }
    }
}
