use std::num::NonZeroUsize;

/// Default config filenames checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["reqburst.toml", "reqburst.json"];

/// One worker per logical processor, or a single worker when that is unknown.
pub(crate) fn default_threads() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}
