use super::Program;
use crate::error;
use crate::lang::{ast::Statement, parse, Error, LineNumber};

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// `END`, or the last line was passed.
    Normal,
    Error(Error),
}

/// ## Program execution
///
/// One `RUN` of a program. The program counter is an index into the
/// ascending line numbers, not a line number.
#[derive(Debug)]
pub struct Execution {
    program: Program,
    lines: Vec<LineNumber>,
    pc: usize,
}

impl Execution {
    /// Returns `None` for an empty program; there is nothing to run.
    pub fn new(program: &Program) -> Option<Execution> {
        if program.is_empty() {
            return None;
        }
        Some(Execution {
            program: program.clone(),
            lines: program.sorted_line_numbers(),
            pc: 0,
        })
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Line number about to execute.
    pub fn line_number(&self) -> Option<LineNumber> {
        self.lines.get(self.pc).copied()
    }

    /// Executes one statement, appending any output to `out`.
    /// Returns `Some` once the run is over. A failed `GOTO` is returned
    /// in the `Halt`, unknown statements are reported in `out`.
    pub fn step(&mut self, out: &mut String) -> Option<Halt> {
        let number = match self.line_number() {
            Some(number) => number,
            None => return Some(Halt::Normal),
        };
        let statement = parse(self.program.get(number).unwrap_or(""));
        match statement {
            Statement::PrintLiteral {
                text,
                suppress_newline,
            } => {
                out.push_str(&text);
                if !suppress_newline {
                    out.push('\n');
                }
            }
            Statement::PrintRaw(text) => {
                out.push_str(&text);
                out.push('\n');
            }
            Statement::Goto(target) => match self.lines.binary_search(&target) {
                Ok(index) => {
                    self.pc = index;
                    return None;
                }
                Err(_) => return Some(Halt::Error(error!(UndefinedLine, target))),
            },
            Statement::InvalidGoto(target) => {
                return Some(Halt::Error(error!(InvalidTarget, number; &target)))
            }
            Statement::End => return Some(Halt::Normal),
            Statement::Unknown(raw) => {
                let error = error!(UnknownStatement, number; &raw);
                out.push_str(&format!("{}\n", error));
            }
        }
        self.pc += 1;
        None
    }

    /// Steps until the run halts or `cycles` statements have executed.
    pub fn run(&mut self, cycles: usize, out: &mut String) -> Option<Halt> {
        for _ in 0..cycles {
            if let Some(halt) = self.step(out) {
                return Some(halt);
            }
        }
        None
    }
}
