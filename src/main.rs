//! # calc
//!
//! An interactive calculator for the terminal.
//!

fn main() {
    calc::term::main();
}
