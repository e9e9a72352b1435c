/*!
## Rust Machine Module

This Rust module runs FOCAL programs: the line table, the control stack
that closes loops and calls at line and group boundaries, expression
evaluation, variable storage and the statistics report.

*/

pub type Address = usize;

pub mod codec;
mod evaluate;
mod frame;
mod function;
mod listing;
mod operation;
mod options;
mod program;
mod runtime;
mod stack;
mod statistics;
mod val;
mod var;

pub use evaluate::{Evaluator, Slot};
pub use frame::Frame;
pub use function::Function;
pub use listing::Listing;
pub use operation::Operation;
pub use options::Options;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use statistics::Statistics;
pub use val::Val;
pub use var::Var;
