//! Screen and system commands.

use ansi_term::Colour;
use std::path::Path;
use std::process::Command;

pub const CLEAR: &str = "\x1b[2J\x1b[H";

pub fn splash(color: Colour) -> String {
    let banner = [
        "╔════════════════════════════════╗",
        "║        PC P - POPLISTIC        ║",
        "║      COMMAND PROCESSOR v1.5    ║",
        "╚════════════════════════════════╝",
        "© 2025 Poplistic Systems",
        "Type HELP for commands",
    ]
    .join("\n");
    format!("{}\n{}\n\n", CLEAR, color.paint(banner))
}

pub fn help(color: Colour) -> String {
    let text = "
Available commands:

CAT                       - List files
TYPE <file>               - Show file contents
RUN <file>                - Run a python script
DELETE <file>             - Delete a file
RENAME <old> <new>        - Rename a file
COPY <src> <dest>         - Copy a file
MKDIR <name>              - Create directory
RMDIR <name>              - Remove directory
CLS                       - Clear screen
TIME                      - Show current time
SYSINFO                   - Show system info
HELP                      - Show this help
EXIT / QUIT               - Exit shell
ECHO <text>               - Print text
COLOR <r> <g> <b>         - Set text color (RGB)
BEEP                      - Beep sound (if possible)

BASIC                     - Enter BASIC mode
NEW                       - Clear BASIC program
LIST                      - List BASIC program
SAVE <file>               - Save BASIC program to file
LOAD <file>               - Load BASIC program from file
RUN                       - Run BASIC program
";
    format!("{}\n", color.paint(text))
}

pub fn time() -> String {
    format!("{}\n", chrono::Local::now().format("%H:%M:%S"))
}

pub fn sysinfo() -> String {
    format!(
        "PC P SYSTEM - {}-{} | {} | {} {}\n",
        std::env::consts::OS,
        std::env::consts::FAMILY,
        std::env::consts::ARCH,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}

/// Parses `COLOR` arguments. Each component is 0 to 255.
pub fn color(r: &str, g: &str, b: &str) -> Option<Colour> {
    let r = r.parse::<u8>().ok()?;
    let g = g.parse::<u8>().ok()?;
    let b = b.parse::<u8>().ok()?;
    Some(Colour::RGB(r, g, b))
}

pub fn beep() -> String {
    "\x07\n".to_string()
}

/// Runs a python script and waits for it. Its output goes straight
/// to the terminal.
pub fn run_python(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    if !path.is_file() {
        return format!("File '{}' not found.\n", name);
    }
    log::info!("running python3 {}", path.display());
    match Command::new("python3").arg(&path).status() {
        Ok(status) => {
            log::debug!("python3 {} exited with {}", path.display(), status);
            String::new()
        }
        Err(error) => format!("Error running file: {}\n", error),
    }
}
