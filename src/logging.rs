use log::{LevelFilter, Metadata, Record};

use std::env;

/// Environment variable holding the log level, e.g. `CONNECT4_LOG=debug`
pub const LOG_ENV_VAR: &str = "CONNECT4_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        // stdout belongs to the board and the prompts
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parses a level name, falling back to `warn` for anything unrecognised
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Installs the logger with the level taken from [`LOG_ENV_VAR`]
///
/// Calling this more than once keeps the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
