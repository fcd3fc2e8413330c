//! Program files: one `<line number> <statement text>` entry per line,
//! ascending, UTF-8, no header.

use super::Program;
use crate::error;
use crate::lang::{Error, Line};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Writes every line of `program` to `path`, replacing the file.
/// A failure part way through may leave a partial file behind.
pub fn save<P: AsRef<Path>>(program: &Program, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let failed = |error: std::io::Error| {
        error!(IoError; &format!("Error saving BASIC program: {}", error))
    };
    let mut file = BufWriter::new(File::create(path).map_err(failed)?);
    for line in program.lines() {
        writeln!(file, "{}", line).map_err(failed)?;
    }
    file.flush().map_err(failed)?;
    log::info!("saved {} lines to {}", program.len(), path.display());
    Ok(())
}

/// Reads a program from `path`. Lines that do not start with a line
/// number followed by statement text are skipped.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Program, Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(error!(FileNotFound; &path.display().to_string()));
    }
    let failed = |error: std::io::Error| {
        error!(IoError; &format!("Error loading BASIC program: {}", error))
    };
    let reader = BufReader::new(File::open(path).map_err(failed)?);
    let mut program = Program::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(failed)?;
        match Line::from_entry(&line) {
            Some(line) => {
                program.insert(line);
            }
            None => log::debug!("{}:{}: skipped {:?}", path.display(), index + 1, line),
        }
    }
    log::info!("loaded {} lines from {}", program.len(), path.display());
    Ok(program)
}
