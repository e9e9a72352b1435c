#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(String),
    LParen(char),
    RParen(char),
    Comma,
    Semicolon,
    Bang,
    Hash,
    Colon,
    Percent,
    Dollar,
}

impl Token {
    pub fn from_char(ch: char) -> Option<Token> {
        use Token::*;
        Some(match ch {
            '(' | '[' | '<' => LParen(ch),
            ')' | ']' | '>' => RParen(ch),
            ',' => Comma,
            ';' => Semicolon,
            '!' => Bang,
            '#' => Hash,
            ':' => Colon,
            '%' => Percent,
            '$' => Dollar,
            _ => Operator(self::Operator::from_char(ch)?),
        })
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen(c) | RParen(c) => write!(f, "{}", c),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Bang => write!(f, "!"),
            Hash => write!(f, "#"),
            Colon => write!(f, ":"),
            Percent => write!(f, "%"),
            Dollar => write!(f, "$"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    Encoded(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s) => write!(f, "{}", s),
            Encoded(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Commands. FOCAL only ever looks at the first letter, so `S`, `SET`
/// and `SETTLE` are all `Word::Set`. The spelling is kept for listing.
#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Ask(String),
    Comment(String),
    Do(String),
    Erase(String),
    For(String),
    Goto(String),
    If(String),
    Library(String),
    Modify(String),
    Operate(String),
    Quit(String),
    Return(String),
    Set(String),
    Type(String),
    Write(String),
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        let spelling = s.to_string();
        Some(match s.chars().next()?.to_ascii_uppercase() {
            'A' => Ask(spelling),
            'C' => Comment(spelling),
            'D' => Do(spelling),
            'E' => Erase(spelling),
            'F' => For(spelling),
            'G' => Goto(spelling),
            'I' => If(spelling),
            'L' => Library(spelling),
            'M' => Modify(spelling),
            'O' => Operate(spelling),
            'Q' => Quit(spelling),
            'R' => Return(spelling),
            'S' => Set(spelling),
            'T' => Type(spelling),
            'W' => Write(spelling),
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        use Word::*;
        match self {
            Ask(_) => "ASK",
            Comment(_) => "COMMENT",
            Do(_) => "DO",
            Erase(_) => "ERASE",
            For(_) => "FOR",
            Goto(_) => "GOTO",
            If(_) => "IF",
            Library(_) => "LIBRARY",
            Modify(_) => "MODIFY",
            Operate(_) => "OPERATE",
            Quit(_) => "QUIT",
            Return(_) => "RETURN",
            Set(_) => "SET",
            Type(_) => "TYPE",
            Write(_) => "WRITE",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Ask(s) | Comment(s) | Do(s) | Erase(s) | For(s) | Goto(s) | If(s) | Library(s)
            | Modify(s) | Operate(s) | Quit(s) | Return(s) | Set(s) | Type(s) | Write(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '^' => Some(Caret),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
            '=' => Some(Equal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
        }
    }
}
