//! JSON envelope written to stdout for every command, and the exit code
//! that goes with it.
//!
//! Success: `{"success": true, "data": ...}`.
//! Failure: `{"success": false, "error": {"code", "message", "details", ...}}`.

use std::io::{self, Write};

use serde::Serialize;
use taskman::error::Hint;
use taskman::{Error, ErrorCode, Result};

pub const EXIT_INTERNAL: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_NOT_FOUND: i32 = 4;
pub const EXIT_REMOTE: i32 = 20;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<Hint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        Self {
            code: err.code.as_str(),
            message: err.message.clone(),
            details: err.details.clone(),
            hints: err.hints.clone(),
            retryable: err.retryable,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn render(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::internal_json(e.to_string(), Some("serialize response".to_string())))
    }
}

impl Envelope<()> {
    pub fn failed(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody::from(err)),
        }
    }
}

fn write_envelope<T: Serialize, W: Write>(out: &mut W, envelope: &Envelope<T>) -> Result<()> {
    let payload = envelope.render()?;
    match writeln!(out, "{}", payload) {
        Ok(()) => Ok(()),
        // reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::internal_io(e.to_string(), Some("write stdout".to_string()))),
    }
}

/// Serializes a command's output and pairs it with its exit code.
pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(err.to_string(), Some("serialize response".to_string()))),
                EXIT_INTERNAL,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    if code.is_not_found() {
        return EXIT_NOT_FOUND;
    }
    match code {
        ErrorCode::ConfigMissingKey
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument => EXIT_USAGE,
        ErrorCode::RemoteRequestFailed => EXIT_REMOTE,
        _ => EXIT_INTERNAL,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match result {
        Ok(data) => write_envelope(&mut out, &Envelope::ok(data)),
        Err(err) => write_envelope(&mut out, &Envelope::failed(&err)),
    }
}
