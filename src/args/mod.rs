//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod params;
mod parsers;
mod types;


pub use cli::BurstArgs;
pub use params::{ParameterSource, QueryParams};
pub use types::{LogFormat, LogLevel};

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
