use thiserror::Error;

/// Configuration problems detected before any worker is launched.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Worker count must be >= 1.")]
    ZeroWorkers,
    #[error("Missing URL (set -url or provide it in config).")]
    MissingUrl,
    #[error("One of -params or -random is required.")]
    MissingParameterSource,
    #[error("-params and -random are mutually exclusive.")]
    ParameterSourceConflict,
    #[error("Invalid params payload '{value}': {reason}")]
    InvalidParams { value: String, reason: &'static str },
    #[error("Invalid log level '{value}'. Use trace, debug, info, warn, or error.")]
    InvalidLogLevel { value: String },
    #[error("Invalid log format '{value}'. Use text, compact, or json.")]
    InvalidLogFormat { value: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
