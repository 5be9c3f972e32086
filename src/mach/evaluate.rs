use super::{Operation, Var};
use crate::error;
use crate::lang::ast::Expression;
use crate::lang::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluation
///
/// Walks an expression tree against the variable store.

pub trait Evaluate {
    fn evaluate(&self, vars: &Var) -> Result<f64>;
}

impl Evaluate for Expression {
    fn evaluate(&self, vars: &Var) -> Result<f64> {
        match self {
            Expression::Number(_, n) => Ok(*n),
            Expression::Var(col, ident) => match vars.get(ident.as_str()) {
                Some(val) => Ok(val),
                None => Err(error!(UndefinedVariable, ..col; ident.as_str())),
            },
            Expression::Negation(col, expr) => {
                Operation::negate(expr.evaluate(vars)?).map_err(|e| e.in_column(col))
            }
            Expression::Multiply(col, lhs, rhs) => {
                binary(vars, col, lhs, rhs, Operation::multiply)
            }
            Expression::Divide(col, lhs, rhs) => binary(vars, col, lhs, rhs, Operation::divide),
            Expression::Add(col, lhs, rhs) => binary(vars, col, lhs, rhs, Operation::sum),
            Expression::Subtract(col, lhs, rhs) => {
                binary(vars, col, lhs, rhs, Operation::subtract)
            }
        }
    }
}

fn binary(
    vars: &Var,
    col: &Column,
    lhs: &Expression,
    rhs: &Expression,
    op: fn(f64, f64) -> Result<f64>,
) -> Result<f64> {
    let lhs = lhs.evaluate(vars)?;
    let rhs = rhs.evaluate(vars)?;
    op(lhs, rhs).map_err(|e| e.in_column(col))
}
