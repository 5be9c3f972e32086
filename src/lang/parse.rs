use super::{ast::*, token::*, Column, Error, Spanned};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Build an expression tree from a lexed line.
///
/// Every token must be consumed; anything left over after a complete
/// expression is a syntax error.
pub fn parse(tokens: &[Spanned]) -> Result<Expression> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Spanned>,
    peeked: Option<&'a Spanned>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Spanned]) -> Result<Expression> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
        };
        let expr = parse.expression()?;
        match parse.next() {
            None => Ok(expr),
            Some(Token::RParen) => {
                Err(error!(SyntaxError, ..&parse.column(); "UNMATCHED RIGHT PARENTHESIS"))
            }
            Some(Token::Operator(Operator::Caret)) => {
                Err(error!(SyntaxError, ..&parse.column(); "UNSUPPORTED OPERATOR"))
            }
            Some(_) => Err(error!(SyntaxError, ..&parse.column(); "EXPECTED OPERATOR")),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        let (col, token) = match self.peeked.take() {
            Some(spanned) => spanned,
            None => self.token_stream.next()?,
        };
        self.col = col.clone();
        Some(token)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked.map(|(_, token)| token)
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        while let Some(node) = additive(self.peek()) {
            self.next();
            let column = self.column();
            let rhs = self.term()?;
            lhs = node(column, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        while let Some(node) = multiplicative(self.peek()) {
            self.next();
            let column = self.column();
            let rhs = self.factor()?;
            lhs = node(column, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expression> {
        let token = match self.next() {
            Some(token) => token,
            None => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        };
        let column = self.column();
        match token {
            Token::Number(n) => Ok(Expression::Number(column, *n)),
            Token::Ident(ident) => Ok(Expression::Var(column, ident.clone())),
            Token::Unknown(ident) => Err(error!(UndefinedVariable, ..&column; ident.as_str())),
            Token::LParen => {
                let expr = self.expression()?;
                match self.next() {
                    Some(Token::RParen) => Ok(expr),
                    _ => Err(error!(SyntaxError, ..&column; "EXPECTED RIGHT PARENTHESIS")),
                }
            }
            Token::Operator(Operator::Plus) => self.factor(),
            Token::Operator(Operator::Minus) => {
                let expr = self.factor()?;
                Ok(Expression::Negation(column, Box::new(expr)))
            }
            Token::Operator(Operator::Caret) => {
                Err(error!(SyntaxError, ..&column; "UNSUPPORTED OPERATOR"))
            }
            Token::Operator(_) | Token::RParen => {
                Err(error!(SyntaxError, ..&column; "EXPECTED EXPRESSION"))
            }
        }
    }
}

type BinaryNode = fn(Column, Box<Expression>, Box<Expression>) -> Expression;

fn additive(token: Option<&Token>) -> Option<BinaryNode> {
    match token {
        Some(Token::Operator(Operator::Plus)) => Some(Expression::Add),
        Some(Token::Operator(Operator::Minus)) => Some(Expression::Subtract),
        _ => None,
    }
}

fn multiplicative(token: Option<&Token>) -> Option<BinaryNode> {
    match token {
        Some(Token::Operator(Operator::Multiply)) => Some(Expression::Multiply),
        Some(Token::Operator(Operator::Divide)) => Some(Expression::Divide),
        _ => None,
    }
}
