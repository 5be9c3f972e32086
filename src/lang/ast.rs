use super::{Column, Ident};

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(Column, f64),
    Var(Column, Ident),
    Negation(Column, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Number(col, _)
            | Var(col, _)
            | Negation(col, _)
            | Multiply(col, _, _)
            | Divide(col, _, _)
            | Add(col, _, _)
            | Subtract(col, _, _) => col.clone(),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Number(_, n) => write!(f, "{}", n),
            Var(_, ident) => write!(f, "{}", ident),
            Negation(_, expr) => write!(f, "-{}", expr),
            Multiply(_, lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Divide(_, lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Add(_, lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Subtract(_, lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
        }
    }
}
