use serde::Deserialize;

use crate::args::{LogFormat, LogLevel};

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "workers")]
    pub threads: Option<usize>,
    pub params: Option<String>,
    pub random: Option<bool>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<LogLevel>,
    pub format: Option<LogFormat>,
    /// `stderr`, `stdout`, or a file path.
    pub output: Option<String>,
    pub no_color: Option<bool>,
}
