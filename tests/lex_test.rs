use calc::lang::{lex, token::*, ErrorCode, MAX_TOKENS};
use calc::mach::Var;

fn tokens(s: &str, vars: &Var) -> Vec<Token> {
    lex(s, vars).unwrap().into_iter().map(|(_, t)| t).collect()
}

#[test]
fn test_operators() {
    let vars = Var::new();
    assert_eq!(
        tokens("+-*/^()", &vars),
        vec![
            Token::Operator(Operator::Plus),
            Token::Operator(Operator::Minus),
            Token::Operator(Operator::Multiply),
            Token::Operator(Operator::Divide),
            Token::Operator(Operator::Caret),
            Token::LParen,
            Token::RParen,
        ]
    );
}

#[test]
fn test_numbers_and_names() {
    let mut vars = Var::new();
    vars.set("x_1", 2.0).unwrap();
    assert_eq!(
        tokens("12.5*x_1-pi", &vars),
        vec![
            Token::Number(12.5),
            Token::Operator(Operator::Multiply),
            Token::Ident(Ident::new("x_1")),
            Token::Operator(Operator::Minus),
            Token::Ident(Ident::new("pi")),
        ]
    );
}

#[test]
fn test_number_followed_by_name() {
    let vars = Var::new();
    assert_eq!(
        tokens("2e", &vars),
        vec![Token::Number(2.0), Token::Ident(Ident::new("e"))]
    );
}

#[test]
fn test_names_resolve_at_lex_time() {
    let mut vars = Var::new();
    let e = lex("speed * 2", &vars).unwrap_err();
    assert!(e.is(ErrorCode::UndefinedVariable));
    vars.set("speed", 3.0).unwrap();
    assert!(lex("speed * 2", &vars).is_ok());
    vars.reset();
    assert!(lex("speed * 2", &vars).is_err());
}

#[test]
fn test_unknown_characters() {
    let vars = Var::new();
    for s in &["1 = 2", "3 % 2", "a & b", "1,5", "2 ** 3!"] {
        let e = lex(s, &vars).unwrap_err();
        assert!(
            e.is(ErrorCode::UnknownCharacter) || e.is(ErrorCode::UndefinedVariable),
            "{} : {}",
            s,
            e
        );
    }
    let e = lex("1,5", &vars).unwrap_err();
    assert_eq!(e.to_string(), "UNKNOWN CHARACTER (1..2); ,");
}

#[test]
fn test_bound_is_explicit() {
    let vars = Var::new();
    let line = "(".repeat(MAX_TOKENS + 1);
    let e = lex(&line, &vars).unwrap_err();
    assert!(e.is(ErrorCode::TooManyTokens));
    assert_eq!(e.column(), MAX_TOKENS..MAX_TOKENS + 1);
    assert_eq!(lex(&"(".repeat(MAX_TOKENS), &vars).unwrap().len(), MAX_TOKENS);
}
