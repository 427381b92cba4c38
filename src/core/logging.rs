//! Diagnostic logging bootstrap.
//!
//! Routes the `log` facade to stderr through `flexi_logger`. Progress lines
//! meant for a human go through `log_status!` instead and are independent of
//! this logger.
//!
//! # Invariants
//! - Initialization happens at most once per process; later calls are no-ops.
//! - Access tokens are never passed to the logger.

use flexi_logger::{Logger, LoggerHandle};
use std::sync::Mutex;

use crate::config::LOG_VAR;
use crate::error::{Error, Result};

static LOGGER: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// Starts the stderr logger with a `flexi_logger` spec such as `"warn"` or
/// `"taskman=debug"`.
pub fn init(spec: &str) -> Result<()> {
    let mut slot = LOGGER
        .lock()
        .map_err(|_| Error::internal_unexpected("logger state poisoned"))?;
    if slot.is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(spec)
        .map_err(|e| Error::config_invalid_value(LOG_VAR, Some(spec.to_string()), e.to_string()))?
        .log_to_stderr()
        .format_for_stderr(flexi_logger::default_format)
        .start()
        .map_err(|e| Error::internal_unexpected(format!("failed to start logger: {}", e)))?;

    *slot = Some(handle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init("warn").unwrap();
        init("debug").unwrap();
        log::warn!("logger active");
    }
}
