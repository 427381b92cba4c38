//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and form-field prompting.

use std::io::{self, BufRead, IsTerminal, Write};

use taskman::utils::validation;

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

pub fn is_stderr_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn can_prompt() -> bool {
    is_stdin_tty() && is_stderr_tty()
}

pub fn prompt(message: &str) -> taskman::Result<String> {
    eprint!("{}", message);
    io::stderr().flush().ok();

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line).map_err(|e| {
        taskman::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
    })?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Fills a form field: the flag value when given, otherwise a prompt on an
/// interactive terminal. Blank answers are allowed.
pub fn text(value: Option<String>, field: &str, label: &str) -> taskman::Result<String> {
    match value {
        Some(v) => Ok(v),
        None if can_prompt() => prompt(&format!("{}: ", label)),
        None => Err(taskman::Error::validation_missing_argument(vec![format!(
            "--{}",
            field
        )])),
    }
}

/// Like [`text`], but the result must not be blank.
pub fn field(value: Option<String>, field: &str, label: &str) -> taskman::Result<String> {
    let value = text(value, field, label)?;
    validation::require_non_empty(&value, field, &format!("{} cannot be empty", label))?;
    Ok(value)
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if is_stderr_tty() {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
