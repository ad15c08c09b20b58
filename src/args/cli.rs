use clap::Parser;

use crate::error::{AppError, AppResult, ValidationError};
use crate::logger::{LogOutput, LoggingSettings};

use super::defaults::default_threads;
use super::params::{ParameterSource, parse_params};
use super::parsers::{parse_log_format, parse_log_level};
use super::types::{LogFormat, LogLevel};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fire a burst of concurrent HTTP GET requests at a URL and report the average elapsed time."
)]
pub struct BurstArgs {
    /// Url to send the requests to, requires http|https://
    #[arg(long)]
    pub url: Option<String>,

    /// Number of concurrent workers (defaults to the number of logical processors)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Literal query parameters, e.g. '{"foo":"bar"}', '(foo, bar)' or 'foo=bar'
    #[arg(long, conflicts_with = "random")]
    pub params: Option<String>,

    /// Send a freshly generated ?ref=<8 alphanumeric chars> with every worker
    #[arg(long)]
    pub random: bool,

    /// Path to config file (TOML/JSON). Defaults to ./reqburst.toml or ./reqburst.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error); REQBURST_LOG/RUST_LOG take precedence
    #[arg(long = "log-level", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Log format (text, compact, json)
    #[arg(long = "log-format", env = "REQBURST_LOG_FORMAT", value_parser = parse_log_format)]
    pub log_format: Option<LogFormat>,

    /// Log destination: stderr, stdout, or a file path
    #[arg(long = "log-output")]
    pub log_output: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl BurstArgs {
    /// Returns the configured target URL.
    ///
    /// # Errors
    ///
    /// Returns an error when neither the CLI nor the config file provided one.
    pub fn target_url(&self) -> AppResult<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(default_threads)
    }

    /// Resolves `--params` / `--random` into a single parameter source.
    ///
    /// # Errors
    ///
    /// Returns an error when both or neither are set, or when the literal
    /// payload cannot be parsed.
    pub fn parameter_source(&self) -> AppResult<ParameterSource> {
        match (self.params.as_deref(), self.random) {
            (Some(_), true) => Err(AppError::validation(
                ValidationError::ParameterSourceConflict,
            )),
            (Some(raw), false) => Ok(ParameterSource::Literal(parse_params(raw)?)),
            (None, true) => Ok(ParameterSource::RandomRef),
            (None, false) => Err(AppError::validation(
                ValidationError::MissingParameterSource,
            )),
        }
    }

    #[must_use]
    pub fn logging_settings(&self) -> LoggingSettings {
        LoggingSettings {
            level: self.log_level,
            verbose: self.verbose,
            format: self.log_format.unwrap_or_default(),
            output: self
                .log_output
                .as_deref()
                .map_or(LogOutput::Stderr, LogOutput::from_value),
            no_color: self.no_color,
        }
    }
}
