use super::Column;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    column: Column,
    message: Rc<str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            column: 0..0,
            message: "".into(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn shift_column(&self, offset: usize) -> Error {
        if self.column == (0..0) {
            return self.clone();
        }
        Error {
            code: self.code,
            column: self.column.start + offset..self.column.end + offset,
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            column: self.column.clone(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 2,
    Overflow = 6,
    OutOfMemory = 7,
    DivisionByZero = 11,
    UnknownCharacter = 31,
    UndefinedVariable = 32,
    IdentifierTooLong = 33,
    TooManyTokens = 34,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            11 => "DIVISION BY ZERO",
            31 => "UNKNOWN CHARACTER",
            32 => "UNDEFINED VARIABLE",
            33 => "IDENTIFIER TOO LONG",
            34 => "TOO MANY TOKENS",
            _ => "",
        };
        let mut suffix = String::new();
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "CALCULATOR ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
