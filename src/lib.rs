//! # FOCAL
//!
//! The FOCAL programming language of the PDP-8, run from plain text files.
//!
//! Install with [Rust](https://www.rust-lang.org/tools/install) and
//! the command `cargo install focal-lang`. Then write a program and run it.
//! ```text
//! $ cat hello.fc
//! 1.10 TYPE "HELLO WORLD", !
//! $ focal hello.fc
//! HELLO WORLD
//! ```
//!
//! The library can also run programs without a terminal. Lines go in
//! through [`mach::Runtime::enter`] and everything the program does comes
//! back from [`mach::Runtime::execute`] as a [`mach::Event`].
//! ```
//! use focal::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.enter("1.10 SET A=5; TYPE A");
//! runtime.run();
//! assert_eq!(runtime.execute(100), Event::Print(" 5 ".to_string()));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
