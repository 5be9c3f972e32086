//! # calc
//!
//! An interactive calculator for the terminal.
//!
//! Begin by opening a terminal and running the executable. If you get the
//! following, you have achieved success.
//! ```text
//! calc v2.0.0 - A simple expression evaluator
//! Type 'help' for more information.
//! > █
//! ```
//!
//! The calculator can also be embedded. Every line goes through
//! [`mach::Runtime::enter`] and comes back as an [`mach::Outcome`].
//! ```
//! use calc::mach::{Outcome, Runtime};
//! let mut runtime = Runtime::default();
//! assert_eq!(runtime.enter("x = 10"), Outcome::Assignment("x".into(), 10.0));
//! assert_eq!(runtime.enter("(x + 2) * 3").to_string(), "36");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
