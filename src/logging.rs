//! Optional file-logging bootstrap.
//!
//! The library itself only talks to the `log` facade; embedding applications
//! may install any backend they like. `init_logging` is a convenience that
//! writes to a log file and takes effect at most once per process; later
//! calls are no-ops.

use std::path::Path;

use flexi_logger::{FileSpec, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

use crate::errors::{AppError, AppResult};

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

pub fn init_logging(level: &str, log_dir: &Path) -> AppResult<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(log_dir)?;
    let handle = Logger::try_with_str(level)
        .map_err(|e| AppError::Logging(format!("invalid log level `{level}`: {e}")))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("homekeeper"),
        )
        .append()
        .start()
        .map_err(|e| AppError::Logging(format!("failed to start logger: {e}")))?;

    // A second racing initializer loses; its handle is dropped and the
    // winner's file stays in effect.
    let _ = LOGGER.set(handle);
    Ok(())
}

/// Whether `init_logging` has already installed the file backend.
pub fn logging_active() -> bool {
    LOGGER.get().is_some()
}
