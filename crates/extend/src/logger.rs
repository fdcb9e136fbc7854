use codemap::SpanLoc;
use std::fmt::Debug;

/// Sink for diagnostics produced while resolving extends
pub trait Logger: Debug {
    /// Logs a non-fatal warning, e.g. an `:extend()` that matched nothing.
    ///
    /// `location` is `None` when the offending node carries no file information.
    fn warn(&self, location: Option<SpanLoc>, message: &str);
}

/// Logs events to standard error
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    #[inline]
    fn warn(&self, location: Option<SpanLoc>, message: &str) {
        match location {
            Some(location) => eprintln!(
                "Warning: {}\n    ./{}:{}:{}",
                message,
                location.file.name(),
                location.begin.line + 1,
                location.begin.column + 1
            ),
            None => eprintln!("Warning: {}", message),
        }
    }
}

/// Discards all log events
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn warn(&self, _location: Option<SpanLoc>, _message: &str) {}
}
