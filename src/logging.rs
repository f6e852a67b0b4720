use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn get_logger() -> &'static StderrLogger {
    LOGGER.get_or_init(|| StderrLogger::new(log::Level::Warn))
}

/// Registers the logger. Calling it again only changes the level.
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Maps the number of `-v` flags to a level, starting from warnings.
pub fn level_from_verbosity(verbosity: u8) -> log::Level {
    match verbosity {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        2 => log::Level::Debug,
        _ => log::Level::Trace,
    }
}

pub struct StderrLogger {
    min_level: RwLock<log::Level>,
}

impl StderrLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self
            .min_level
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self
            .min_level
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }

    fn format(record: &Record) -> String {
        format!(
            "[{} {}] {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere to report a failed write to stderr
            let _ = writeln!(io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use log::{Level, Record};

    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_from_verbosity(0), Level::Warn);
        assert_eq!(level_from_verbosity(1), Level::Info);
        assert_eq!(level_from_verbosity(2), Level::Debug);
        assert_eq!(level_from_verbosity(9), Level::Trace);
    }

    #[test]
    fn filters_by_level() {
        let logger = StderrLogger::new(Level::Info);
        let meta = |level| Metadata::builder().level(level).build();
        assert!(logger.enabled(&meta(Level::Error)));
        assert!(logger.enabled(&meta(Level::Info)));
        assert!(!logger.enabled(&meta(Level::Debug)));

        logger.set_min_level(Level::Trace);
        assert!(logger.enabled(&meta(Level::Trace)));
    }

    #[test]
    fn formats_level_and_source() {
        let line = StderrLogger::format(
            &Record::builder()
                .level(Level::Warn)
                .module_path(Some("gridmaze::settings"))
                .args(format_args!("bad value"))
                .build(),
        );
        assert_eq!(line, "[WARN gridmaze::settings] bad value");
    }
}
