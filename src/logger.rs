use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::args::{LogFormat, LogLevel};
use crate::error::{AppError, AppResult, ConfigError};

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    Stdout,
    File(PathBuf),
}

impl LogOutput {
    /// `stderr` and `stdout` name the standard streams; anything else is a file path.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "" | "stderr" => LogOutput::Stderr,
            "stdout" => LogOutput::Stdout,
            path => LogOutput::File(PathBuf::from(path)),
        }
    }
}

/// Logging options resolved from the CLI and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: Option<LogLevel>,
    pub verbose: bool,
    pub format: LogFormat,
    pub output: LogOutput,
    pub no_color: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: None,
            verbose: false,
            format: LogFormat::Text,
            output: LogOutput::Stderr,
            no_color: false,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error when a log file output cannot be opened.
pub fn init_logging(settings: &LoggingSettings) -> AppResult<()> {
    let filter = resolve_filter(settings);
    let ansi = !settings.no_color;

    match &settings.output {
        LogOutput::Stderr => install(settings.format, filter, std::io::stderr, ansi),
        LogOutput::Stdout => install(settings.format, filter, std::io::stdout, ansi),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| {
                    AppError::config(ConfigError::OpenLogOutput {
                        path: path.clone(),
                        source: err,
                    })
                })?;
            install(settings.format, filter, Mutex::new(file), false);
        }
    }
    Ok(())
}

fn resolve_filter(settings: &LoggingSettings) -> EnvFilter {
    std::env::var("REQBURST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(default_directive(settings)),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        )
}

fn default_directive(settings: &LoggingSettings) -> &'static str {
    match settings.level {
        Some(level) => level.as_str(),
        None if settings.verbose => "debug",
        None => "info",
    }
}

fn install<W>(format: LogFormat, filter: EnvFilter, writer: W, ansi: bool)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi);

    let result = match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Compact => tracing::subscriber::set_global_default(builder.compact().finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
