//! # PC P
//!
//! The Poplistic command processor: a small command shell with a BASIC
//! mode for line-numbered programs.
//!
//! Start the executable from a terminal. After the banner, type `BASIC`
//! and enter a program.
//! ```text
//! ] BASIC
//! BASIC> 10 PRINT "HELLO, ";
//! BASIC> 20 PRINT WORLD
//! BASIC> RUN
//! HELLO, WORLD
//!
//! BASIC> EXIT
//! ] EXIT
//! Goodbye!
//! ```
//!
//! Diagnostics are logged to stderr. Set `RUST_LOG=debug` to see runs
//! start and stop.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

#[path = "doc/commands.rs"]
#[allow(non_snake_case)]
pub mod __Commands;

pub mod lang;
pub mod mach;
pub mod shell;
pub mod term;
