use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn negate(val: f64) -> Result<f64> {
        finite(-val)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> Result<f64> {
        finite(lhs * rhs)
    }

    pub fn divide(lhs: f64, rhs: f64) -> Result<f64> {
        if rhs == 0.0 {
            return Err(error!(DivisionByZero));
        }
        finite(lhs / rhs)
    }

    pub fn sum(lhs: f64, rhs: f64) -> Result<f64> {
        finite(lhs + rhs)
    }

    pub fn subtract(lhs: f64, rhs: f64) -> Result<f64> {
        finite(lhs - rhs)
    }
}

fn finite(val: f64) -> Result<f64> {
    if val.is_finite() {
        Ok(val)
    } else {
        Err(error!(Overflow))
    }
}
