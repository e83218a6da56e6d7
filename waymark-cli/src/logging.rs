//! Logger installation for the CLI.
//!
//! Library crates log through the `log` facade; only the binary decides
//! where records go. Output is written to stderr so that stdout stays
//! machine-readable when `--json` is used.

use std::io::{self, Write};

use clap::ValueEnum;
use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

/// Environment variable consulted when `--log-level` is absent.
pub(crate) const ENV_LOG_LEVEL: &str = "WAYMARK_LOG_LEVEL";

/// Verbosity accepted by `--log-level` and `WAYMARK_LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum LogLevel {
    Error,
    #[default]
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub(crate) const fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

/// Pick the level from the flag, then the environment, then the default.
///
/// Unparseable environment values fall back to the default rather than
/// failing the command.
pub(crate) fn resolve_level(flag: Option<LogLevel>, env_value: Option<&str>) -> LogLevel {
    flag.or_else(|| env_value.and_then(|value| LogLevel::from_str(value.trim(), true).ok()))
        .unwrap_or_default()
}

pub(crate) fn init_logger(level: LogLevel) -> io::Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()));

    builder.try_init().map_err(io::Error::other)
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
