use crate::error::{CliError, CliResult};

use std::path::PathBuf;
use std::time::SystemTime;

use campus_config::LogLevel;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the fern logger.
///
/// Sinks to `log_file` when given, otherwise to stderr so command output
/// on stdout stays machine-readable. Colors apply only to the stderr
/// sink, and only when requested.
#[track_caller]
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> CliResult<()> {
    let dispatch = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    CliError::logger(format!(
                        "Failed to open log file {}: {e}",
                        log_path.display()
                    ))
                })?;
            formatted_dispatch(None).chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            formatted_dispatch(Some(colors)).chain(std::io::stderr())
        }
        None => formatted_dispatch(None).chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(log_level.0)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={:?}, file={}",
            log_level.0,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", log_level.0),
    }

    Ok(())
}

/// The one line format every sink shares; `colors` switches level
/// coloring on for TTY output.
fn formatted_dispatch(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let level = match colors {
            Some(colors) => colors.color(record.level()).to_string(),
            None => record.level().to_string(),
        };
        out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            date = humantime::format_rfc3339(SystemTime::now()),
            file = record.file().unwrap_or("unknown"),
            line = record.line().unwrap_or(0),
        ))
    })
}
