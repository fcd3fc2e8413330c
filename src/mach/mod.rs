/*!
## Rust Machine Module

This Rust module stores, runs, saves and loads BASIC programs.

*/

mod execution;
pub mod persist;
mod program;
mod runtime;

pub use execution::Execution;
pub use execution::Halt;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;

#[cfg(test)]
mod tests;
