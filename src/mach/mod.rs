/*!
## Rust Machine Module

This Rust module evaluates expression trees and keeps the session state
of the calculator: the variable store and the line router.

*/

pub mod format;

mod evaluate;
mod operation;
mod runtime;
mod var;

pub use evaluate::Evaluate;
pub use operation::Operation;
pub use runtime::Command;
pub use runtime::Outcome;
pub use runtime::Runtime;
pub use var::Var;
pub use var::MAX_VARIABLES;
