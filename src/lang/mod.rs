/*!
# Rust Language Module

This Rust module turns the text of one program line into a statement
the machine can execute.

*/

/// Key of a program line and target of `GOTO`.
pub type LineNumber = u32;

#[macro_use]
mod error;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use line::line_number;
pub use line::Line;
pub use parse::parse;

pub mod ast;

#[cfg(test)]
mod tests;
