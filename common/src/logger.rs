use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

enum LogSink {
    Stdout,
    File(Mutex<File>),
}

pub struct Logger {
    prefix: Option<String>,
    sink: LogSink,
}

impl Logger {
    fn new(prefix: Option<String>, sink: LogSink) -> Self {
        Self { prefix, sink }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        let entry = format_entry(&timestamp, self.prefix.as_deref(), file, line, message);
        match &self.sink {
            LogSink::Stdout => println!("{}", entry),
            LogSink::File(file) => {
                // A poisoned lock or a failed write drops the entry.
                if let Ok(mut file) = file.lock() {
                    let _ = writeln!(file, "{}", entry);
                }
            }
        }
    }
}

fn format_entry(
    timestamp: &str,
    prefix: Option<&str>,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
        None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
    }
}

/// Installs the process logger. Entries go to `log_file` (appended) when
/// given, to stdout otherwise. Only the first call has any effect.
pub fn init_logger(prefix: Option<String>, log_file: Option<&str>) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let sink = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path, e))?;
            LogSink::File(Mutex::new(file))
        }
        None => LogSink::Stdout,
    };

    LOGGER.get_or_init(|| Logger::new(prefix, sink));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
