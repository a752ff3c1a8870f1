//! Logging for resolution diagnostics
//!
//! Hosts can hand a [`Logger`] to the credential selector. Independently, a
//! global debug file logger records every resolution when `AZCLOUD_DEBUG` is
//! set, which helps when the host swallows stderr.

mod traits;
mod noop;
mod console;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;

pub use file_logger::{log_file_path, LogLevel};
