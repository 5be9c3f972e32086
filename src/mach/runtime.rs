use super::{format, Evaluate, Var};
use crate::lang::{lex, parse, Error, Ident, MAX_IDENT_LEN};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const HELP: &str = "\
Commands:
  help      - Show this help message
  clear     - Clear the console
  vars      - Display all defined variables
  version   - Display version information
  exit/quit - Exit the calculator

Expressions:
  Arithmetic: 5 + 3, 10 * (3 + 2), -4 / 8
  Variables: x = 5, pi, e (predefined)

Keyboard Shortcuts:
  Up/Down   - Navigate command history
  Ctrl-L    - Clear the console
  Ctrl-C    - Discard the current line
  Ctrl-D    - Exit the calculator";

/// ## Built-in commands
///
/// Recognized only when they are the whole line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Help,
    Clear,
    Exit,
    Vars,
    Version,
}

impl Command {
    pub const NAMES: &'static [&'static str] =
        &["help", "clear", "exit", "quit", "vars", "version"];

    fn from_line(line: &str) -> Option<Command> {
        let line = line.trim_start();
        if line
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '=' | '+' | '-' | '*' | '/'))
        {
            return None;
        }
        use Command::*;
        match line {
            "help" => Some(Help),
            "clear" => Some(Clear),
            "exit" | "quit" => Some(Exit),
            "vars" => Some(Vars),
            "version" => Some(Version),
            _ => None,
        }
    }
}

/// ## Result of entering one line
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Empty,
    Command(Command, String),
    Assignment(Rc<str>, f64),
    Value(f64),
    Error(Error),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Empty => Ok(()),
            Outcome::Command(_, output) => write!(f, "{}", output),
            Outcome::Assignment(name, value) => {
                write!(f, "{} = {}", name, format::general(*value))
            }
            Outcome::Value(value) => write!(f, "{}", format::number(*value)),
            Outcome::Error(error) => write!(f, "?{}", error),
        }
    }
}

/// ## Calculator session
///
/// Owns the variables for one interactive session. Every line goes
/// through [`Runtime::enter`], which decides whether the line is a
/// command, an assignment, or an expression.
#[derive(Debug)]
pub struct Runtime {
    vars: Var,
    running: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            vars: Var::new(),
            running: true,
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn enter(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::Empty;
        }
        if let Some(command) = Command::from_line(line) {
            let output = self.command(command);
            return Outcome::Command(command, output);
        }
        if let Some((name, offset)) = assignment(line) {
            return match self.assign(name, &line[offset..]) {
                Ok(value) => Outcome::Assignment(name.into(), value),
                Err(error) => Outcome::Error(error.shift_column(offset)),
            };
        }
        match self.evaluate(line) {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Error(error),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn reset(&mut self) {
        self.vars.reset();
    }

    pub fn version() -> String {
        format!(
            "calc v{} - A simple expression evaluator",
            env!("CARGO_PKG_VERSION")
        )
    }

    pub fn list_vars(&self) -> String {
        let mut s = String::from("Variables:");
        for (name, value) in self.vars.list() {
            s.push_str(&format!("\n  {} = {}", name, format::general(value)));
        }
        s
    }

    fn command(&mut self, command: Command) -> String {
        match command {
            Command::Help => format!("{} - Help\n{}", Runtime::version(), HELP),
            Command::Clear => String::new(),
            Command::Exit => {
                self.running = false;
                "Exiting...".to_string()
            }
            Command::Vars => self.list_vars(),
            Command::Version => Runtime::version(),
        }
    }

    fn assign(&mut self, name: &str, expr: &str) -> Result<f64> {
        let value = self.evaluate(expr)?;
        self.vars.set(name, value)?;
        Ok(value)
    }

    fn evaluate(&self, expr: &str) -> Result<f64> {
        let tokens = lex(expr, &self.vars)?;
        parse(&tokens)?.evaluate(&self.vars)
    }
}

/// Match `name = rest` and return the name with the offset of `rest`.
fn assignment(line: &str) -> Option<(&str, usize)> {
    let end = line.find(|c: char| !Ident::is_continue(c))?;
    let name = &line[..end];
    if name.is_empty() || name.len() > MAX_IDENT_LEN {
        return None;
    }
    if !line[end..].starts_with(" = ") {
        return None;
    }
    Some((name, end + 3))
}
