use anyhow::Result;
use clap::{Args, ValueEnum};

/// Logging options shared by every pixflate binary.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Set the log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub loglevel: LogLevel,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors (default).
    Warn,
    /// Show info, warnings and errors.
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text with second timestamps.
    Plain,
    /// Structured JSON per log record.
    Json,
}

/// Install the `env_logger` backend for the selected level and format.
///
/// Diagnostics go to stderr, so piped stdout stays clean.
pub fn init_logging(args: &LogArgs) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(args.loglevel.to_level_filter());

    match args.log_format {
        LogFormat::Plain => {
            builder.format_timestamp_secs();
        }
        LogFormat::Json => {
            builder.format(|buf, record| {
                use std::io::Write;
                writeln!(
                    buf,
                    "{{\"ts\":{},\"lvl\":\"{}\",\"msg\":\"{}\"}}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}
