use super::{apply_config, load_config_file, types::ConfigFile};
use clap::{CommandFactory, FromArgMatches};
use tempfile::tempdir;

use crate::args::{BurstArgs, LogFormat, LogLevel};
use crate::error::{AppError, ConfigError};

fn parse_cli(raw: &[&str]) -> Result<(BurstArgs, clap::ArgMatches), String> {
    let matches = BurstArgs::command()
        .try_get_matches_from(raw)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args =
        BurstArgs::from_arg_matches(&matches).map_err(|err| format!("from matches: {}", err))?;
    Ok((args, matches))
}

fn write_config(name: &str, content: &str) -> Result<(tempfile::TempDir, ConfigFile), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join(name);
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    Ok((dir, config))
}

#[test]
fn parse_toml_config_with_logging_section() -> Result<(), String> {
    let (_dir, config) = write_config(
        "reqburst.toml",
        r#"
url = "http://localhost:3000"
threads = 8
params = "foo=bar"

[logging]
level = "debug"
format = "json"
output = "reqburst.log"
"#,
    )?;

    if config.url.as_deref() != Some("http://localhost:3000") {
        return Err("Unexpected url".to_owned());
    }
    if config.threads != Some(8) {
        return Err("Unexpected threads".to_owned());
    }
    let Some(logging) = config.logging else {
        return Err("Expected logging section".to_owned());
    };
    if logging.level != Some(LogLevel::Debug) {
        return Err("Unexpected level".to_owned());
    }
    if logging.format != Some(LogFormat::Json) {
        return Err("Unexpected format".to_owned());
    }
    if logging.output.as_deref() != Some("reqburst.log") {
        return Err("Unexpected output".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config() -> Result<(), String> {
    let (_dir, config) = write_config(
        "reqburst.json",
        r#"{ "url": "https://example.com", "workers": 3, "random": true }"#,
    )?;
    if config.url.as_deref() != Some("https://example.com") {
        return Err("Unexpected url".to_owned());
    }
    if config.threads != Some(3) {
        return Err("Expected workers alias to set threads".to_owned());
    }
    if config.random != Some(true) {
        return Err("Expected random".to_owned());
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("reqburst.yaml");
    std::fs::write(&path, "url: x").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        other => Err(format!("Expected UnsupportedExtension, got {:?}", other)),
    }
}

#[test]
fn malformed_toml_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("reqburst.toml");
    std::fs::write(&path, "url = ").map_err(|err| format!("write failed: {}", err))?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        other => Err(format!("Expected ParseToml, got {:?}", other)),
    }
}

#[test]
fn config_fills_values_missing_from_cli() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["reqburst"])?;
    let config = ConfigFile {
        url: Some("http://localhost:9000".to_owned()),
        threads: Some(2),
        params: Some("a=1".to_owned()),
        random: None,
        logging: None,
    };
    apply_config(&mut args, &matches, config).map_err(|err| err.to_string())?;
    if args.url.as_deref() != Some("http://localhost:9000") {
        return Err("Expected url from config".to_owned());
    }
    if args.threads != Some(2) {
        return Err("Expected threads from config".to_owned());
    }
    if args.params.as_deref() != Some("a=1") || args.random {
        return Err("Expected params from config".to_owned());
    }
    Ok(())
}

#[test]
fn cli_values_override_config() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&[
        "reqburst",
        "--url",
        "http://cli",
        "--threads",
        "5",
        "--random",
        "--log-level",
        "error",
    ])?;
    let config = ConfigFile {
        url: Some("http://config".to_owned()),
        threads: Some(1),
        params: Some("a=1".to_owned()),
        random: None,
        logging: Some(super::types::LoggingConfig {
            level: Some(LogLevel::Trace),
            format: Some(LogFormat::Compact),
            output: None,
            no_color: Some(true),
        }),
    };
    apply_config(&mut args, &matches, config).map_err(|err| err.to_string())?;
    if args.url.as_deref() != Some("http://cli") {
        return Err("Expected CLI url".to_owned());
    }
    if args.threads != Some(5) {
        return Err("Expected CLI threads".to_owned());
    }
    if args.params.is_some() || !args.random {
        return Err("Expected CLI parameter source to win".to_owned());
    }
    if args.log_level != Some(LogLevel::Error) {
        return Err("Expected CLI log level".to_owned());
    }
    if args.log_format != Some(LogFormat::Compact) {
        return Err("Expected config log format".to_owned());
    }
    if !args.no_color {
        return Err("Expected config no_color".to_owned());
    }
    Ok(())
}

#[test]
fn config_with_params_and_random_conflicts() -> Result<(), String> {
    let (mut args, matches) = parse_cli(&["reqburst"])?;
    let config = ConfigFile {
        params: Some("a=1".to_owned()),
        random: Some(true),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, &matches, config) {
        Err(AppError::Config(ConfigError::Conflict { left, right }))
            if left == "params" && right == "random" =>
        {
            Ok(())
        }
        other => Err(format!("Expected conflict, got {:?}", other)),
    }
}
