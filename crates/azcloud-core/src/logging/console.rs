//! Console logger implementation

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::file_logger::LogLevel;
use super::traits::Logger;

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// A logger that writes prefixed lines to stderr, or any other writer
///
/// Messages below `min_level` (default `Info`) are dropped, so a host can
/// hand this to the credential selector without drowning in debug output.
#[derive(Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
    sink: Sink,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a stderr logger with the default prefix
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            prefix: "[azcloud]".to_string(),
            min_level: LogLevel::Info,
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    fn write(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let label = match level {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        let mut sink = self.sink.lock();
        // A broken console must not fail credential acquisition
        let _ = writeln!(sink, "{} {}: {}", self.prefix, label, message);
    }

    /// Logger plus a handle to everything it wrote
    #[cfg(test)]
    pub(crate) fn buffered() -> (Self, CapturedOutput) {
        let output = CapturedOutput::default();
        (Self::with_writer(output.clone()), output)
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("prefix", &self.prefix)
            .field("min_level", &self.min_level)
            .finish()
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.write(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}

/// Shared in-memory writer for tests
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl CapturedOutput {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

#[cfg(test)]
impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let (logger, output) = ConsoleLogger::buffered();
        logger.debug("hidden");
        logger.info("resolved");
        logger.error("failed");

        assert_eq!(output.contents(), "[azcloud] INFO: resolved\n[azcloud] ERROR: failed\n");
    }

    #[test]
    fn test_prefix_and_debug_level() {
        let (logger, output) = ConsoleLogger::buffered();
        let logger = logger.with_prefix("[deploy]").with_level(LogLevel::Debug);
        crate::log_debug!(logger, "cloud {}", "AzureChinaCloud");
        crate::log_warn!(logger, "pinned");

        assert_eq!(
            output.contents(),
            "[deploy] DEBUG: cloud AzureChinaCloud\n[deploy] WARN: pinned\n"
        );
        assert!(format!("{:?}", logger).contains("[deploy]"));
    }
}
