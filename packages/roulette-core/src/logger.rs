//! Console logger.
//!
//! Implements the [`log`] crate's facade. Every record is printed to standard output as
//! `LEVEL [uptime] target - message`, where the uptime is measured from [`init`].
//!
//! ```ignore
//! use log::{info, LevelFilter};
//! use roulette_core::logger;
//!
//! fn main() {
//!     logger::init(LevelFilter::Info).expect("logger already installed");
//!     info!("robot program started");
//! }
//! ```
//!
//! Example output:
//! ```text
//! INFO [1s 240ms] roulette_commands::sequence - OpenArm finished
//! ```

use std::{
    io::{self, Write},
    sync::OnceLock,
    time::{Duration, Instant},
};

use humantime::format_duration;
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// Writes log records to standard output.
#[derive(Debug)]
pub struct RobotLogger {
    start: Instant,
}

impl RobotLogger {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Formats one record the way it is written to the console.
    fn format(&self, record: &Record<'_>) -> String {
        format_line(self.start.elapsed(), record)
    }
}

/// Rounds `elapsed` to whole milliseconds so the printed uptime stays readable.
fn format_line(elapsed: Duration, record: &Record<'_>) -> String {
    let elapsed = Duration::from_millis(elapsed.as_millis() as u64);
    format!(
        "{} [{}] {} - {}\n",
        record.level(),
        format_duration(elapsed),
        record.target(),
        record.args()
    )
}

impl log::Log for RobotLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let line = self.format(record);
            io::stdout().lock().write_all(line.as_bytes()).ok();
        }
    }

    fn flush(&self) {
        io::stdout().lock().flush().ok();
    }
}

static LOGGER: OnceLock<RobotLogger> = OnceLock::new();

/// Installs the console logger as the global [`log`] implementation.
///
/// # Errors
///
/// Returns a [`SetLoggerError`] if a global logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(RobotLogger::new);
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod test {
    use log::Level;

    use super::*;

    #[test]
    fn formats_level_uptime_and_target() {
        let line = format_line(
            Duration::from_micros(1_240_700),
            &Record::builder()
                .level(Level::Warn)
                .target("roulette::container")
                .args(format_args!("arm stalled"))
                .build(),
        );

        assert_eq!(line, "WARN [1s 240ms] roulette::container - arm stalled\n");
    }
}
