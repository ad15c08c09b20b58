use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::info;

use crate::args::{BurstArgs, DEFAULT_CONFIG_FILES};
use crate::config::{apply_config, load_config};
use crate::dispatch::{DispatchOutcome, Dispatcher, RequestSpec};
use crate::error::AppResult;
use crate::http::ReqwestPort;

/// Long flags that are also accepted with a single leading dash.
const SINGLE_DASH_FLAGS: [&str; 4] = ["url", "threads", "params", "random"];
/// Flags from [`SINGLE_DASH_FLAGS`] that consume the following argument.
const VALUE_FLAGS: [&str; 3] = ["url", "threads", "params"];
/// `--` only flags that consume the following argument.
const LONG_VALUE_FLAGS: [&str; 4] = ["config", "log-level", "log-format", "log-output"];

pub(crate) fn run() -> AppResult<()> {
    let Some((mut args, matches)) = parse_args()? else {
        return Ok(());
    };

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, config)?;
    }

    crate::logger::init_logging(&args.logging_settings())?;
    info!(pid = std::process::id(), "Parent process id");
    info!(?args, "Starting with parameters");

    let spec = build_spec(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute(spec))
}

fn parse_args() -> AppResult<Option<(BurstArgs, ArgMatches)>> {
    let mut cmd = BurstArgs::command();
    let raw_args = normalize_single_dash_flags(std::env::args_os());

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = BurstArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn build_spec(args: &BurstArgs) -> AppResult<RequestSpec> {
    let url = args.target_url()?;
    let source = args.parameter_source()?;
    Ok(RequestSpec::new(url, source, args.worker_count())?)
}

async fn execute(spec: RequestSpec) -> AppResult<()> {
    let port = Arc::new(ReqwestPort::new()?);
    let dispatcher = Dispatcher::new(port);
    match dispatcher.run(&spec).await? {
        DispatchOutcome::Completed(summary) => {
            println!("Time Delta: {} seconds", summary.time_delta);
        }
        DispatchOutcome::InvalidUrl { .. } => {}
    }
    Ok(())
}

/// Rewrites `-url`, `-threads`, `-params` and `-random` (also `-url=...`) to
/// their `--` forms. Values following a value flag are left untouched.
fn normalize_single_dash_flags<I>(raw_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for (position, arg) in raw_args.into_iter().enumerate() {
        if position == 0 || passthrough || expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }
        let Some(flag) = single_dash_flag(text) else {
            if let Some(name) = text.strip_prefix("--") {
                expecting_value = VALUE_FLAGS.contains(&name) || LONG_VALUE_FLAGS.contains(&name);
            }
            normalized.push(arg);
            continue;
        };
        let (name, has_inline_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };
        expecting_value = !has_inline_value && VALUE_FLAGS.contains(&name);
        normalized.push(OsString::from(format!("-{}", text)));
    }

    normalized
}

fn single_dash_flag(text: &str) -> Option<&str> {
    let flag = text.strip_prefix('-')?;
    if flag.starts_with('-') {
        return None;
    }
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name).then_some(flag)
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
