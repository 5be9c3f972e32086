use super::{token::*, Column, Error, MAX_IDENT_LEN, MAX_TOKENS};
use crate::error;
use crate::mach::Var;

type Result<T> = std::result::Result<T, Error>;

/// A token together with the columns it was lexed from.
pub type Spanned = (Column, Token);

/// Tokenize a whole line before any parsing happens.
///
/// Identifiers are looked up in `vars` as they are lexed. A name that is
/// not a variable becomes a [`Token::Unknown`] and lexing carries on so the
/// full token sequence is built; the first error found is what gets returned.
/// Characters the calculator doesn't know stop the lexer on the spot.
pub fn lex(s: &str, vars: &Var) -> Result<Vec<Spanned>> {
    CalcLexer::lex(s, vars)
}

fn is_calc_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_calc_digit(c: char) -> bool {
    c.is_ascii_digit()
}

struct CalcLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
    vars: &'a Var,
    stopped: bool,
}

impl<'a> CalcLexer<'a> {
    fn lex(s: &str, vars: &Var) -> Result<Vec<Spanned>> {
        let lexer = CalcLexer {
            chars: s.chars().peekable(),
            col: 0,
            vars,
            stopped: false,
        };
        let mut tokens: Vec<Spanned> = vec![];
        let mut undefined: Option<Error> = None;
        for item in lexer {
            let (column, token) = match item {
                Ok(spanned) => spanned,
                Err(error) => return Err(undefined.unwrap_or(error)),
            };
            if tokens.len() >= MAX_TOKENS {
                let error = error!(TooManyTokens, ..&column);
                return Err(undefined.unwrap_or(error));
            }
            if let Token::Unknown(name) = &token {
                if undefined.is_none() {
                    undefined = Some(error!(UndefinedVariable, ..&column; name.as_str()));
                }
            }
            tokens.push((column, token));
        }
        match undefined {
            Some(error) => Err(error),
            None => Ok(tokens),
        }
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_calc_whitespace(*pk) {
                break;
            }
            self.next_char();
        }
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        let mut decimal = false;
        while let Some(&pk) = self.chars.peek() {
            if pk == '.' {
                if decimal {
                    break;
                }
                decimal = true;
            } else if !is_calc_digit(pk) {
                break;
            }
            s.push(pk);
            self.next_char();
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Token::Number(n)),
            Ok(_) => Err(error!(Overflow, ..&(start..self.col); s.as_str())),
            Err(_) => Err(error!(UnknownCharacter, ..&(start..self.col); s.as_str())),
        }
    }

    fn alphabetic(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !Ident::is_continue(pk) {
                break;
            }
            s.push(pk);
            self.next_char();
        }
        if s.chars().count() > MAX_IDENT_LEN {
            return Err(error!(IdentifierTooLong, ..&(start..self.col)));
        }
        if self.vars.contains(&s) {
            Ok(Token::Ident(Ident::new(&s)))
        } else {
            Ok(Token::Unknown(Ident::new(&s)))
        }
    }
}

impl<'a> Iterator for CalcLexer<'a> {
    type Item = Result<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }
        self.whitespace();
        let pk = *self.chars.peek()?;
        let start = self.col;
        let token = if is_calc_digit(pk) || pk == '.' {
            self.number()
        } else if Ident::is_start(pk) {
            self.alphabetic()
        } else if let Some(token) = Token::from_char(pk) {
            self.next_char();
            Ok(token)
        } else {
            Err(error!(UnknownCharacter, ..&(start..start + 1); pk.to_string().as_str()))
        };
        match token {
            Ok(token) => Some(Ok((start..self.col, token))),
            Err(error) => {
                self.stopped = true;
                Some(Err(error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn tokens(s: &str) -> Vec<Token> {
        let vars = Var::new();
        lex(s, &vars).unwrap().into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_skips_whitespace() {
        assert_eq!(
            tokens(" 1 +\t2 "),
            vec![
                Token::Number(1.0),
                Token::Operator(Operator::Plus),
                Token::Number(2.0)
            ]
        );
    }

    #[test]
    fn test_columns() {
        let vars = Var::new();
        let columns: Vec<Column> = lex("pi*(10.5)", &vars)
            .unwrap()
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(columns, vec![0..2, 2..3, 3..4, 4..8, 8..9]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens("3.25"), vec![Token::Number(3.25)]);
        assert_eq!(tokens(".5"), vec![Token::Number(0.5)]);
        assert_eq!(tokens("7."), vec![Token::Number(7.0)]);
        assert_eq!(
            tokens("1.2.3"),
            vec![Token::Number(1.2), Token::Number(0.3)]
        );
    }

    #[test]
    fn test_lone_decimal_point() {
        let vars = Var::new();
        let e = lex(".", &vars).unwrap_err();
        assert!(e.is(ErrorCode::UnknownCharacter));
    }

    #[test]
    fn test_caret_is_an_operator() {
        assert_eq!(
            tokens("2^3"),
            vec![
                Token::Number(2.0),
                Token::Operator(Operator::Caret),
                Token::Number(3.0)
            ]
        );
    }

    #[test]
    fn test_known_identifier() {
        assert_eq!(tokens("e"), vec![Token::Ident(Ident::new("e"))]);
    }

    #[test]
    fn test_unknown_identifier() {
        let vars = Var::new();
        let e = lex("1 + zed", &vars).unwrap_err();
        assert!(e.is(ErrorCode::UndefinedVariable));
        assert_eq!(e.to_string(), "UNDEFINED VARIABLE (4..7); zed");
    }

    #[test]
    fn test_first_error_wins() {
        let vars = Var::new();
        let e = lex("zed + $", &vars).unwrap_err();
        assert!(e.is(ErrorCode::UndefinedVariable));
    }

    #[test]
    fn test_unknown_character() {
        let vars = Var::new();
        let e = lex("2 $ 3", &vars).unwrap_err();
        assert!(e.is(ErrorCode::UnknownCharacter));
        assert_eq!(e.column(), 2..3);
        let e = lex("x = 1", &vars).unwrap_err();
        assert!(e.is(ErrorCode::UndefinedVariable));
        let mut vars = Var::new();
        vars.set("x", 1.0).unwrap();
        let e = lex("x = 1", &vars).unwrap_err();
        assert!(e.is(ErrorCode::UnknownCharacter));
    }

    #[test]
    fn test_identifier_too_long() {
        let vars = Var::new();
        let name = "a".repeat(MAX_IDENT_LEN + 1);
        let e = lex(&name, &vars).unwrap_err();
        assert!(e.is(ErrorCode::IdentifierTooLong));
    }

    #[test]
    fn test_token_limit() {
        let vars = Var::new();
        let at_limit = format!("-{}", vec!["1"; MAX_TOKENS / 2].join("+"));
        assert_eq!(lex(&at_limit, &vars).unwrap().len(), MAX_TOKENS);
        let over = vec!["1"; MAX_TOKENS / 2 + 1].join("+");
        let e = lex(&over, &vars).unwrap_err();
        assert!(e.is(ErrorCode::TooManyTokens));
        assert_eq!(e.column(), 200..201);
    }

    #[test]
    fn test_literal_overflow() {
        let vars = Var::new();
        let largest = format!("1{}", "0".repeat(308));
        assert_eq!(tokens(&largest), vec![Token::Number(1e308)]);
        let too_big = format!("1{}", "0".repeat(400));
        let e = lex(&too_big, &vars).unwrap_err();
        assert!(e.is(ErrorCode::Overflow));
        assert_eq!(e.column(), 0..401);
    }
}
