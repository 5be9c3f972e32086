use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Largest number of variables a session can hold, constants included.
pub const MAX_VARIABLES: usize = 100;

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;

/// ## Variable memory
///
/// Names keep the order they were first assigned in so `vars` lists
/// them predictably. A fresh store holds only `pi` and `e`.

#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    vars: Vec<(Rc<str>, f64)>,
}

impl Default for Var {
    fn default() -> Self {
        let mut var = Var { vars: vec![] };
        var.reset();
        var
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn reset(&mut self) {
        self.vars.clear();
        self.vars.push(("pi".into(), PI));
        self.vars.push(("e".into(), E));
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.position(var_name).is_some()
    }

    pub fn get(&self, var_name: &str) -> Option<f64> {
        self.position(var_name).map(|index| self.vars[index].1)
    }

    pub fn set(&mut self, var_name: &str, value: f64) -> Result<()> {
        if let Some(index) = self.position(var_name) {
            self.vars[index].1 = value;
            return Ok(());
        }
        if self.vars.len() >= MAX_VARIABLES {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        self.vars.push((var_name.into(), value));
        Ok(())
    }

    pub fn list(&self) -> impl Iterator<Item = (&str, f64)> {
        self.vars.iter().map(|(name, value)| (name.as_ref(), *value))
    }

    fn position(&self, var_name: &str) -> Option<usize> {
        self.vars.iter().position(|(name, _)| name.as_ref() == var_name)
    }
}
