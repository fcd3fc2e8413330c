use super::{persist, Execution, Halt, Program};
use crate::error;
use crate::lang::{Error, Line};
use std::collections::VecDeque;

/// ## Runtime
///
/// Owns the program and drives a run of it. Input goes in with `enter`
/// and everything the runtime has to say comes out of `execute`.
#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    execution: Option<Execution>,
    print_buffer: String,
    pending: VecDeque<Event>,
}

/// Events are returned from `Runtime::execute()` for the
/// front end to handle.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Nothing is running; read more input.
    Stopped,
    /// A run used up its cycles. Call `execute` again.
    Running,
    Print(String),
    /// One line of a program listing, without a newline.
    List(String),
    Errors(Vec<Error>),
    /// `EXIT` was entered.
    Exit,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn is_running(&self) -> bool {
        self.execution.is_some()
    }

    /// Accepts a numbered program line or one of `NEW`, `LIST`, `RUN`,
    /// `SAVE <path>`, `LOAD <path>`, `EXIT`. Returns false for blank
    /// input, which is ignored.
    pub fn enter(&mut self, s: &str) -> bool {
        let line = s.trim();
        if line.is_empty() {
            return false;
        }
        let mut words = line.splitn(2, char::is_whitespace);
        let command = words.next().unwrap_or("").to_ascii_uppercase();
        let arg = words.next().map(str::trim).unwrap_or("");
        match (command.as_str(), arg.is_empty()) {
            ("EXIT", true) => self.pending.push_back(Event::Exit),
            ("NEW", true) => self.new_program(),
            ("LIST", true) => self.list(),
            ("RUN", true) => self.run(),
            ("SAVE", false) => self.save(arg),
            ("LOAD", false) => self.load(arg),
            _ => match Line::from_input(line) {
                Some(line) => {
                    self.program.insert(line);
                }
                None => self.error(error!(InvalidLine)),
            },
        }
        true
    }

    /// Abandons the current run, if any. Output it already produced
    /// is still delivered.
    pub fn interrupt(&mut self) -> bool {
        match self.execution.take() {
            Some(execution) => {
                log::warn!("run interrupted at index {}", execution.pc());
                true
            }
            None => false,
        }
    }

    /// Runs at most `cycles` statements and reports what happened.
    /// A run always advances by at least one statement.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(event) = self.pending.pop_front() {
            return event;
        }
        if let Some(execution) = &mut self.execution {
            if let Some(halt) = execution.run(cycles.max(1), &mut self.print_buffer) {
                self.halt(halt);
            }
        }
        if !self.print_buffer.is_empty() {
            return Event::Print(std::mem::take(&mut self.print_buffer));
        }
        if self.execution.is_some() {
            Event::Running
        } else {
            Event::Stopped
        }
    }

    fn halt(&mut self, halt: Halt) {
        let line_number = self.execution.take().and_then(|e| e.line_number());
        match halt {
            Halt::Normal => log::debug!("run ended at {:?}", line_number),
            Halt::Error(error) => {
                log::debug!("run failed at {:?}: {:?}", line_number, error);
                self.print_buffer.push_str(&format!("{}\n", error));
            }
        }
        self.print_buffer.push('\n');
    }

    fn error(&mut self, error: Error) {
        self.pending.push_back(Event::Errors(vec![error]));
    }

    fn print(&mut self, s: String) {
        self.pending.push_back(Event::Print(s));
    }

    fn new_program(&mut self) {
        self.program.clear();
        self.print("BASIC program cleared.\n".to_string());
    }

    fn list(&mut self) {
        if self.program.is_empty() {
            return self.error(error!(NoProgram));
        }
        let lines: Vec<Event> = self
            .program
            .lines()
            .map(|line| Event::List(line.to_string()))
            .collect();
        self.pending.extend(lines);
    }

    fn run(&mut self) {
        match Execution::new(&self.program) {
            Some(execution) => {
                log::debug!("run started with {} lines", self.program.len());
                self.execution = Some(execution);
            }
            None => self.error(error!(NoProgram)),
        }
    }

    fn save(&mut self, path: &str) {
        match persist::save(&self.program, path) {
            Ok(()) => self.print(format!("BASIC program saved to '{}'\n", path)),
            Err(error) => {
                log::warn!("save to {} failed", path);
                self.error(error)
            }
        }
    }

    fn load(&mut self, path: &str) {
        match persist::load(path) {
            Ok(program) => {
                self.program = program;
                self.print(format!("BASIC program loaded from '{}'\n", path));
            }
            Err(error) => {
                log::warn!("load from {} failed", path);
                self.error(error)
            }
        }
    }
}
