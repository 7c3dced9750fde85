//! Top-level logger exports and a small global facade.
//!
//! This module re-exports the core logging primitives and exposes a simple
//! global facade for programs that prefer a process-wide logger instance.
//!
//! - `Logger`: trait defining the logging surface
//! - `LogLevel`: enum of levels
//! - `NullLogger`: implementation that discards everything
//! - `ConsoleLogger`: implementation that writes prefixed lines to stdout
//!
//! ```rust,no_run
//! use minlog::logger;
//! logger::init_logger(logger::ConsoleLogger::new(false));
//! logger::info("app started");
//! ```

pub mod core;

pub use self::core::{ConsoleLogger, LogLevel, Logger, NullLogger};

use std::error::Error;
use std::sync::RwLock;

/// Process-wide logger reference used by the convenience functions below.
///
/// Callers install a logger once early in `main` (or from test setup via
/// `set_logger_for_tests`) and then use the helpers like `info` and `error`.
/// Installation leaks the boxed logger so the slot can hand out a reference
/// with a 'static lifetime; re-installation replaces the previous logger and
/// leaks one allocation per call, which is acceptable for a program-lifetime
/// singleton. Until a logger is installed every helper is a no-op.
static GLOBAL_LOGGER: RwLock<Option<&'static dyn Logger>> = RwLock::new(None);

/// Install `logger` as the global logger for the lifetime of the program.
pub fn init_logger<L: Logger>(logger: L) {
    // Leak the logger so it can be referenced with a 'static lifetime.
    let boxed: Box<dyn Logger> = Box::new(logger);
    let leaked: &'static dyn Logger = Box::leak(boxed);
    if let Ok(mut slot) = GLOBAL_LOGGER.write() {
        *slot = Some(leaked);
    }
}

/// For tests: set a logger that will be used by the global facade.
pub fn set_logger_for_tests<L: Logger>(logger: L) {
    init_logger(logger);
}

fn with_logger(f: impl FnOnce(&dyn Logger)) {
    if let Ok(slot) = GLOBAL_LOGGER.read() {
        if let Some(logger) = *slot {
            f(logger);
        }
    }
}

/// Log a diagnostic message using the global logger if set, otherwise no-op.
pub fn debug(message: &str) {
    with_logger(|logger| logger.debug(message));
}

/// Log an informational message using the global logger if set, otherwise no-op.
pub fn info(message: &str) {
    with_logger(|logger| logger.info(message));
}

/// Log an error and its cause using the global logger if set, otherwise no-op.
pub fn error(message: &str, cause: Option<&(dyn Error + 'static)>) {
    with_logger(|logger| logger.error(message, cause));
}

/// Whether the installed logger has debug output enabled.
///
/// Returns false while no logger is installed.
pub fn is_debug_enabled() -> bool {
    let mut enabled = false;
    with_logger(|logger| enabled = logger.is_debug_enabled());
    enabled
}
