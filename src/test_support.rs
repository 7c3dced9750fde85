//! Shared helpers for tests.

use std::error::Error;
use std::fmt;

/// Error value with an optional nested source, for exercising cause output.
#[derive(Debug)]
pub(crate) struct ChainedError {
    message: &'static str,
    source: Option<Box<ChainedError>>,
}

impl ChainedError {
    pub(crate) fn new(message: &'static str) -> Self {
        Self {
            message,
            source: None,
        }
    }

    pub(crate) fn with_source(message: &'static str, source: ChainedError) -> Self {
        Self {
            message,
            source: Some(Box::new(source)),
        }
    }
}

impl fmt::Display for ChainedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl Error for ChainedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|s| s as &(dyn Error + 'static))
    }
}
