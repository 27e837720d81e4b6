//! helper functions for the logging backend
use flexi_logger::{self, Duplicate, LogTarget, Logger};
use log::Level::Warn;
use std::{fs, path::Path};

use crate::GridResult;

/// Creates a logging backend.
/// The level is taken from `RUST_LOG` and defaults to Info.
///
/// Without a `log_dir` all logs go to stderr, since stdout carries the result.
/// With a `log_dir` logs are written to a logfile in that folder and
/// logs with level at least Warn are also written to stderr.
///
/// logs can be written via log::{error!, warn!, info!, debug!, trace!}
pub fn init_logging(log_dir: Option<&Path>) -> GridResult<()> {
    let logger = Logger::with_env_or_str("info").format(flexi_logger::colored_opt_format);
    let logger = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            logger
                .log_target(LogTarget::File)
                .directory(dir)
                .duplicate_to_stderr(Duplicate::Warn)
        }
        None => logger.log_target(LogTarget::StdErr),
    };
    logger.start()?;
    log_panics::init();
    Ok(())
}

/// Creates a logging backend for use in testing
/// By default all logs with Warn or higher are printed to stderr.
pub fn init_test_logging() {
    if !log::log_enabled!(Warn) {
        // Another test thread might have won the race to install a logger.
        Logger::with_env_or_str("warn")
            .format(flexi_logger::colored_opt_format)
            .start()
            .map(|_| ())
            .unwrap_or_else(|error| log::debug!("Test logging already initialized: {}", error));
    }
}
