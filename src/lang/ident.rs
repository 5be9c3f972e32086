// Used in both Token and Ast

use std::rc::Rc;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Ident(Rc<str>);

impl Ident {
    pub fn new(s: &str) -> Ident {
        Ident(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    pub fn is_continue(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
