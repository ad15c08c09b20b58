use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::BurstArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the command
/// line always win.
///
/// # Errors
///
/// Returns an error when the config sets both `params` and `random = true`.
pub fn apply_config(
    args: &mut BurstArgs,
    matches: &ArgMatches,
    config: ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "threads")
        && let Some(threads) = config.threads
    {
        args.threads = Some(threads);
    }

    if !is_cli(matches, "params") && !is_cli(matches, "random") {
        match (config.params, config.random.unwrap_or(false)) {
            (Some(_), true) => {
                return Err(AppError::config(ConfigError::Conflict {
                    left: "params",
                    right: "random",
                }));
            }
            (Some(params), false) => args.params = Some(params),
            (None, random) => args.random = random,
        }
    }

    if let Some(logging) = config.logging {
        if !is_cli(matches, "log_level") && logging.level.is_some() {
            args.log_level = logging.level;
        }
        if !is_cli(matches, "log_format") && logging.format.is_some() {
            args.log_format = logging.format;
        }
        if !is_cli(matches, "log_output") && logging.output.is_some() {
            args.log_output = logging.output;
        }
        if !is_cli(matches, "no_color")
            && let Some(no_color) = logging.no_color
        {
            args.no_color = no_color;
        }
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
