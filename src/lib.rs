//! Core library for the `reqburst` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, the per-worker HTTP request, and the
//! dispatcher that launches a worker batch and aggregates its timings. The
//! primary user-facing interface is the `reqburst` command-line application.
pub mod args;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod logger;
