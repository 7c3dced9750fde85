//! Core logging primitives.
//!
//! This module provides a tiny, purposely minimal logging surface for
//! embedding applications. The goals are to remain dependency-light while
//! offering a consistently-typed `LogLevel` and a `Logger` trait that is easy
//! to implement in tests and small binaries. For production-grade structured
//! logging or filtering, replace or wrap these primitives with a more
//! featureful logger (for example `tracing` or `log` + `env_logger`).
//!
//! Responsibilities:
//! - Provide a lightweight `Logger` trait with debug, info and error
//!   operations plus a debug-enabled query
//! - Offer a baseline no-op implementation for callers that want zero
//!   logging overhead without conditional checks at call sites
//! - Offer a console implementation that writes prefixed lines to stdout
//!
//! Notes on thread-safety and bounds:
//! Implementors of `Logger` must be `Send + Sync + 'static` so the trait
//! objects can be stored in global contexts and shared between threads. The
//! bundled implementations hold no mutable state, so concurrent calls are
//! safe without locking; interleaving at the line level is acceptable.

use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    /// Returns the line prefix used for console output.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Debug => "D>",
            LogLevel::Info => "I>",
            LogLevel::Error => "E>",
        }
    }
}

/// Minimal logger interface used by embedding applications.
///
/// Must be `Send + Sync + 'static` for global usage. Logging calls never
/// return errors: a logger that cannot emit simply drops the message. Any
/// message content is accepted, including empty strings.
pub trait Logger: Send + Sync + 'static {
    /// Emit a diagnostic-level message. May be suppressed.
    fn debug(&self, message: &str);

    /// Emit an informational message.
    fn info(&self, message: &str);

    /// Emit an error message together with the failure that caused it.
    ///
    /// Implementations surface both the caller's message and the cause's
    /// detail, including its `source()` chain when present. `None` means no
    /// additional detail is available and must not fail the call.
    fn error(&self, message: &str, cause: Option<&(dyn Error + 'static)>);

    /// Whether debug-level output is active for this logger instance.
    ///
    /// Pure and stable for the instance's lifetime, so callers can consult
    /// it once to skip building expensive debug messages.
    fn is_debug_enabled(&self) -> bool;
}

/// No-op logger used where callers want zero logging overhead.
///
/// `NullLogger` implements `Logger` but drops all messages. It's useful in
/// unit tests where you want to assert behavior without emitting output. The
/// type is `Copy + Default` to make it lightweight to pass around.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {
        // intentionally do nothing
    }

    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str, _cause: Option<&(dyn Error + 'static)>) {}

    fn is_debug_enabled(&self) -> bool {
        false
    }
}

/// Console logger writing prefixed lines to stdout.
///
/// Holds a single boolean set at construction that gates debug output. There
/// is no setter, so the flag never changes for the lifetime of the instance
/// and `is_debug_enabled` is stable. Each call is one synchronous write.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger {
    debug_enabled: bool,
}

impl ConsoleLogger {
    pub fn new(enable_debug: bool) -> Self {
        Self {
            debug_enabled: enable_debug,
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if self.debug_enabled {
            println!("{} {}", LogLevel::Debug.prefix(), message);
        }
    }

    fn info(&self, message: &str) {
        println!("{} {}", LogLevel::Info.prefix(), message);
    }

    // The cause and its source chain go to stdout as well, so everything a
    // single call emits stays on one stream.
    fn error(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        println!("{} {}", LogLevel::Error.prefix(), message);
        let mut next = cause;
        while let Some(err) = next {
            println!("caused by: {}", err);
            next = err.source();
        }
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }
}
