use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

/// Installs the logger, can be called only once per process.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_level(level);
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Writes `[LEVEL target] message` lines to stderr.
pub struct AppLogger {
    level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(level: LevelFilter) -> Self {
        Self {
            level: RwLock::new(level),
        }
    }

    pub fn level(&self) -> LevelFilter {
        *self.level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_level(&self, level: LevelFilter) {
        *self.level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }
}

pub fn format_record(level: Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{:<5} {}] {}", level, target, message)
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.level(), record.target(), record.args());
        // nowhere to report a failed write to stderr
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_format() {
        let line = format_record(Level::Info, "mazepath", &format_args!("seed {}", 42));
        assert_eq!(line, "[INFO  mazepath] seed 42");
    }

    #[test]
    fn level_filtering() {
        let logger = AppLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));

        logger.set_level(LevelFilter::Trace);
        assert!(logger.enabled(&debug));
    }
}
