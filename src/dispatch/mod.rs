//! Launches the worker batch, joins it in launch order and aggregates timings.
mod runner;
mod spec;
mod timing;


pub use runner::{DispatchOutcome, Dispatcher};
pub use spec::RequestSpec;
