//! File commands: CAT, TYPE, DELETE, RENAME, COPY, MKDIR, RMDIR.
//!
//! Each returns the text to show. Failures are reported in that text,
//! they never stop the shell.

use std::fs;
use std::io;
use std::path::Path;

/// Names in `dir`, sorted.
pub fn cat(dir: &Path) -> String {
    let names: io::Result<Vec<String>> = fs::read_dir(dir).and_then(|entries| {
        entries
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    });
    match names {
        Ok(mut names) => {
            names.sort();
            names.iter().map(|name| format!("{}\n", name)).collect()
        }
        Err(error) => format!("Error listing files: {}\n", error),
    }
}

pub fn type_file(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    if !path.is_file() {
        return format!("File '{}' not found.\n", name);
    }
    match fs::read_to_string(&path) {
        Ok(contents) => format!("{}\n", contents),
        Err(error) => format!("Error reading file: {}\n", error),
    }
}

pub fn delete(dir: &Path, name: &str) -> String {
    report(
        fs::remove_file(dir.join(name)),
        || format!("Deleted '{}'", name),
        "deleting file",
    )
}

pub fn rename(dir: &Path, old: &str, new: &str) -> String {
    report(
        fs::rename(dir.join(old), dir.join(new)),
        || format!("Renamed '{}' to '{}'", old, new),
        "renaming file",
    )
}

/// A directory destination receives a file of the same name.
pub fn copy(dir: &Path, src: &str, dest: &str) -> String {
    let from = dir.join(src);
    let mut to = dir.join(dest);
    if to.is_dir() {
        if let Some(file_name) = from.file_name() {
            to.push(file_name);
        }
    }
    report(
        fs::copy(&from, &to).map(|_| ()),
        || format!("Copied '{}' to '{}'", src, dest),
        "copying file",
    )
}

pub fn mkdir(dir: &Path, name: &str) -> String {
    report(
        fs::create_dir(dir.join(name)),
        || format!("Directory '{}' created.", name),
        "creating directory",
    )
}

pub fn rmdir(dir: &Path, name: &str) -> String {
    report(
        fs::remove_dir(dir.join(name)),
        || format!("Directory '{}' removed.", name),
        "removing directory",
    )
}

fn report<F: FnOnce() -> String>(result: io::Result<()>, done: F, doing: &str) -> String {
    match result {
        Ok(()) => {
            let message = done();
            log::info!("{}", message);
            format!("{}\n", message)
        }
        Err(error) => {
            log::warn!("error {}: {}", doing, error);
            format!("Error {}: {}\n", doing, error)
        }
    }
}
