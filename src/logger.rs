use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Line logger writing to a file; the terminal itself belongs to the game.
pub struct Logger {
    sink: Mutex<File>,
}

impl Logger {
    fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            sink: Mutex::new(file),
        })
    }

    pub fn log(&self, file: &str, line: u32, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| io::Error::other("log sink poisoned"))?;

        writeln!(sink, "[{timestamp}][{file_name}:{line}] {message}")
    }
}

/// Opens `path` for appending and installs it as the process logger.
///
/// A second call keeps the first logger.
pub fn init_logger(path: &Path) -> io::Result<()> {
    let logger = Logger::open(path)?;
    let _ = LOGGER.set(logger);
    Ok(())
}

/// Writes one line if a logger is installed; silently does nothing otherwise.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        let _ = logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
