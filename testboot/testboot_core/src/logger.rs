// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! JSON-line logger for the bootstrap environment.
//!
//! Every record is serialized as a single JSON object per line so that a
//! harness watching the console can parse diagnostics without guessing at
//! framing.

use alloc::format;
use alloc::string::String;
use alloc::string::ToString;
use core::fmt::Write;

use log::SetLoggerError;
use serde::Serialize;
use spin::Mutex;
use spin::MutexGuard;

#[derive(Serialize)]
struct LogEntry {
    #[serde(rename = "type")]
    log_type: &'static str,
    level: String,
    message: String,
    line: String,
}

fn render(level: log::Level, message: &str, line: &str) -> String {
    let entry = LogEntry {
        log_type: "log",
        level: level.as_str().to_string(),
        message: message.to_string(),
        line: line.to_string(),
    };
    // Serializing a struct of strings cannot fail; an empty line beats a
    // panic inside the logger either way.
    let mut out = serde_json::to_string(&entry).unwrap_or_default();
    out.push('\n');
    out
}

/// A logger that writes JSON log lines to a provided writer, such as a
/// firmware console or a serial port.
pub struct BootLogger<T> {
    writer: Mutex<T>,
}

impl<T> BootLogger<T>
where
    T: Write + Send,
{
    /// Creates a new `BootLogger` over `writer`.
    pub const fn new(writer: T) -> Self {
        BootLogger {
            writer: Mutex::new(writer),
        }
    }

    /// Returns a lock guard to the underlying writer, for output that must
    /// bypass record formatting.
    pub fn writer(&self) -> MutexGuard<'_, T> {
        self.writer.lock()
    }
}

impl<T> log::Log for BootLogger<T>
where
    T: Write + Send,
{
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let message = format!("{}", record.args());
        let line = format!(
            "{}:{}",
            record.file().unwrap_or_default(),
            record.line().unwrap_or_default()
        );
        let out = render(record.level(), &message, &line);
        _ = self.writer.lock().write_str(&out);
    }

    fn flush(&self) {}
}

/// Installs `logger` as the global logger and opens up all levels.
pub fn init(logger: &'static dyn log::Log) -> Result<(), SetLoggerError> {
    log::set_logger(logger).map(|()| log::set_max_level(log::LevelFilter::Debug))
}

#[cfg(test)]
mod tests {
    use log::Log;

    use super::*;

    #[test]
    fn records_render_as_json_lines() {
        let logger = BootLogger::new(String::new());
        logger.log(
            &log::Record::builder()
                .args(format_args!("hello"))
                .level(log::Level::Info)
                .file(Some("boot.rs"))
                .line(Some(7))
                .build(),
        );

        let written = logger.writer().clone();
        assert!(written.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(written.trim_end()).unwrap();
        assert_eq!(parsed["type"], "log");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["message"], "hello");
        assert_eq!(parsed["line"], "boot.rs:7");
    }

    #[test]
    fn missing_source_location_still_renders() {
        let out = render(log::Level::Warn, "TEST_START", ":");
        let parsed: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["message"], "TEST_START");
    }
}
