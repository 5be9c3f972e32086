pub use super::ident::Ident;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Ident(Ident),
    Unknown(Ident),
    LParen,
    RParen,
}

impl Token {
    pub fn from_char(c: char) -> Option<Token> {
        match c {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => Operator::from_char(c).map(Token::Operator),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Unknown(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        use Operator::*;
        match c {
            '^' => Some(Caret),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
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
        }
    }
}
