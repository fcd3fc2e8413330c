extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::LineNumber;
use crate::mach::{Event, Program, Runtime};
use crate::shell::{Mode, Outcome, Shell, DEFAULT_COLOR};
use ansi_term::Style;
use clap::Parser;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod options;
pub use options::Options;

pub fn main() {
    let options = Options::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(options, interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(options: Options, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let mut shell = Shell::new(options.color.unwrap_or(DEFAULT_COLOR), ".");
    let command = Interface::new("PCP")?;
    command.set_report_signal(Signal::Interrupt, true);

    if !options.no_splash {
        command.write_fmt(format_args!("{}", shell.splash()))?;
    }
    if options.basic {
        command.write_fmt(format_args!("{}", shell.enter_basic()))?;
    }
    if let Some(program) = &options.program {
        runtime.enter(&format!("LOAD {}", program));
    }

    loop {
        if interrupted.swap(false, Ordering::SeqCst) && runtime.interrupt() {
            command.write_fmt(format_args!("\nUse EXIT to quit.\n"))?;
        }
        match runtime.execute(options.cycles as usize) {
            Event::Stopped => {
                command.set_prompt(&shell.prompt())?;
                let saved_completer = command.completer();
                if shell.mode() == Mode::Basic {
                    command.set_completer(Arc::new(LineCompleter::new(runtime.program().clone())));
                }
                let result = command.read_line()?;
                command.set_completer(saved_completer);
                let string = match result {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(Signal::Interrupt) => {
                        command.set_buffer("")?;
                        command.write_fmt(format_args!("\nUse EXIT to quit.\n"))?;
                        continue;
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                let accepted = match shell.mode() {
                    Mode::Basic => runtime.enter(&string),
                    Mode::Command => {
                        let mut out = String::new();
                        let outcome = shell.dispatch(&string, &mut out);
                        command.write_fmt(format_args!("{}", out))?;
                        match outcome {
                            Outcome::Done => {}
                            Outcome::Basic(line) => {
                                runtime.enter(&line);
                            }
                            Outcome::Quit => break,
                        }
                        !string.trim().is_empty()
                    }
                };
                if accepted {
                    command.add_history_unique(string);
                }
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::List(s) => {
                command.write_fmt(format_args!("{}\n", s))?;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    command.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
            }
            Event::Exit => shell.leave_basic(),
        }
    }
    Ok(())
}

/// Tab after a line number fills in that line for editing.
struct LineCompleter {
    program: Program,
}

impl LineCompleter {
    fn new(program: Program) -> LineCompleter {
        LineCompleter { program }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<LineNumber>().ok()?;
        let s = self.program.line(num)?;
        let mut comp = Completion::simple(s);
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}
