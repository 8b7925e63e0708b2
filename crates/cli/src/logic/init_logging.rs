use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{debug, Level};
use std::str::FromStr;
use std::sync::Once;

const RUST_LOG_ENV: &str = "RUST_LOG";

static INIT: Once = Once::new();

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

fn init_logging_with_level(log_level: log::LevelFilter) {
    let applied = fern::Dispatch::new()
        .format(|out, message, record| {
            let time = Local::now().format("%H:%M:%S%.3f");
            let color = color_from_level(record.level());
            out.finish(format_args!("{time} {color} > {message}"));
        })
        .level(log_level)
        .chain(std::io::stdout())
        .apply();

    if let Err(e) = applied {
        eprintln!("Failed to initialize logging with level `{log_level}`: {e}");
        return;
    }
    debug!("Logging initialized with level: {log_level}");
}

/// # Panics
/// Panics if `log_level` is not a valid log level.
fn parse_log_level_from_str(log_level: &str) -> log::LevelFilter {
    log::LevelFilter::from_str(log_level).unwrap_or_else(|_| {
        panic!(
            "Invalid log level set with `{}`, got: {}",
            RUST_LOG_ENV, log_level
        )
    })
}

fn init_logging_with_level_str(log_level: &str) {
    init_logging_with_level(parse_log_level_from_str(log_level));
}

/// Installs the stdout logger once, at the level given by `RUST_LOG`
/// (`info` when unset).
///
/// # Panics
/// Panics if `RUST_LOG` is set to something that is not a log level.
pub fn init_logging() {
    INIT.call_once(|| match std::env::var(RUST_LOG_ENV) {
        Ok(log_level) => init_logging_with_level_str(&log_level),
        Err(_) => init_logging_with_level(log::LevelFilter::Info),
    });
}
