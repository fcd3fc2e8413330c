/*!
## Command Shell Module

The `] ` prompt. File and system commands run here; BASIC commands are
handed back to the caller for the runtime.

*/

pub mod files;
pub mod system;

use ansi_term::Colour;
use std::path::{Path, PathBuf};

/// Logitech blue, RGB(0,174,239).
pub const DEFAULT_COLOR: Colour = Colour::RGB(0, 174, 239);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Command,
    Basic,
}

/// What the caller should do after `Shell::dispatch`.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Done,
    /// Give this line to the BASIC runtime.
    Basic(String),
    Quit,
}

#[derive(Debug)]
pub struct Shell {
    color: Colour,
    mode: Mode,
    dir: PathBuf,
}

impl Default for Shell {
    fn default() -> Shell {
        Shell::new(DEFAULT_COLOR, ".")
    }
}

impl Shell {
    /// File commands resolve relative names against `dir`.
    pub fn new<P: AsRef<Path>>(color: Colour, dir: P) -> Shell {
        Shell {
            color,
            mode: Mode::Command,
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn color(&self) -> Colour {
        self.color
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn enter_basic(&mut self) -> String {
        self.mode = Mode::Basic;
        format!(
            "{}\n",
            self.color.paint(
                "Entering BASIC mode. Type NEW to clear program, RUN to execute, \
                 LIST to view, SAVE/LOAD <file>, or EXIT to quit BASIC mode."
            )
        )
    }

    pub fn leave_basic(&mut self) {
        self.mode = Mode::Command;
    }

    /// Prompt for the current mode. Escape sequences are wrapped in
    /// `\x01`..`\x02` so the line editor does not count them.
    pub fn prompt(&self) -> String {
        match self.mode {
            Mode::Command => format!(
                "\x01{}\x02] \x01{}\x02",
                self.color.prefix(),
                self.color.suffix()
            ),
            Mode::Basic => "BASIC> ".to_string(),
        }
    }

    pub fn splash(&self) -> String {
        system::splash(self.color)
    }

    /// Runs one command line, appending what it prints to `out`.
    pub fn dispatch(&mut self, line: &str, out: &mut String) -> Outcome {
        let args: Vec<&str> = line.split_whitespace().collect();
        let command = match args.first() {
            Some(command) => command.to_ascii_uppercase(),
            None => return Outcome::Done,
        };
        let args = &args[1..];
        let dir = self.dir.clone();
        let dir = dir.as_path();
        let text = match (command.as_str(), args) {
            ("HELP", _) => system::help(self.color),
            ("CAT", _) => files::cat(dir),
            ("TYPE", [name, ..]) => files::type_file(dir, name),
            ("RUN", []) => return Outcome::Basic("RUN".to_string()),
            ("RUN", [name, ..]) => system::run_python(dir, name),
            ("DELETE", [name, ..]) => files::delete(dir, name),
            ("RENAME", [old, new]) => files::rename(dir, old, new),
            ("COPY", [src, dest]) => files::copy(dir, src, dest),
            ("MKDIR", [name, ..]) => files::mkdir(dir, name),
            ("RMDIR", [name, ..]) => files::rmdir(dir, name),
            ("CLS", _) => format!("{}\n", system::CLEAR),
            ("TIME", _) => system::time(),
            ("SYSINFO", _) => system::sysinfo(),
            ("ECHO", _) => format!("{}\n", args.join(" ")),
            ("COLOR", [r, g, b]) => match system::color(r, g, b) {
                Some(color) => {
                    self.color = color;
                    format!("Text color set to RGB({},{},{})\n", r, g, b)
                }
                None => "Invalid color values. Usage: COLOR <r> <g> <b>\n".to_string(),
            },
            ("BEEP", _) => system::beep(),
            ("BASIC", _) => self.enter_basic(),
            ("NEW", _) => return Outcome::Basic("NEW".to_string()),
            ("LIST", _) => return Outcome::Basic("LIST".to_string()),
            ("SAVE", [name, ..]) => return Outcome::Basic(format!("SAVE {}", name)),
            ("LOAD", [name, ..]) => return Outcome::Basic(format!("LOAD {}", name)),
            ("EXIT", _) | ("QUIT", _) => {
                out.push_str("Goodbye!\n");
                return Outcome::Quit;
            }
            (command, _) => match usage(command) {
                Some(usage) => format!("Usage: {}\n", usage),
                None => format!("Unknown command '{}'. Type HELP for list.\n", command),
            },
        };
        out.push_str(&text);
        Outcome::Done
    }
}

fn usage(command: &str) -> Option<&'static str> {
    Some(match command {
        "TYPE" => "TYPE <file>",
        "DELETE" => "DELETE <file>",
        "RENAME" => "RENAME <old> <new>",
        "COPY" => "COPY <src> <dest>",
        "MKDIR" => "MKDIR <name>",
        "RMDIR" => "RMDIR <name>",
        "COLOR" => "COLOR <r> <g> <b>",
        "SAVE" => "SAVE <file>",
        "LOAD" => "LOAD <file>",
        _ => return None,
    })
}
