//! Level-prefixed log lines on stderr: `[LEVEL]\tmessage`, no timestamps.

use std::io::Write;

use env_logger::Env;
use tracing::Level;

/// Label printed between the brackets for `level`.
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

pub fn format_line(level: Level, message: &str) -> String {
    format!("[{}]\t{}", level_label(level), message)
}

/// Install the global logger. `RUST_LOG` overrides the default level.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(buf, "{}", format_line(record.level(), &record.args().to_string()))
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_level_prefix() {
        assert_eq!(
            format_line(Level::Debug, "This is a debug message!"),
            "[DEBUG]\tThis is a debug message!"
        );
        assert_eq!(
            format_line(Level::Info, "This is an info message!"),
            "[INFO]\tThis is an info message!"
        );
        assert_eq!(
            format_line(Level::Error, "This is an error message!"),
            "[ERROR]\tThis is an error message!"
        );
    }

    #[test]
    fn warn_is_spelled_out() {
        assert_eq!(
            format_line(Level::Warn, "This is a warning message!"),
            "[WARNING]\tThis is a warning message!"
        );
    }
}
