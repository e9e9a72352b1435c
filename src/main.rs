//! # FOCAL
//!
//! Runs a FOCAL program file from the command line.
//!

mod term;

fn main() {
    term::main()
}
