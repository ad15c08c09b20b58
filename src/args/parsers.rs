use super::types::{LogFormat, LogLevel};
use crate::error::AppResult;

pub(super) fn parse_log_level(s: &str) -> AppResult<LogLevel> {
    s.parse::<LogLevel>()
}

pub(super) fn parse_log_format(s: &str) -> AppResult<LogFormat> {
    s.parse::<LogFormat>()
}
