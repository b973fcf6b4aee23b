//! Core types, configuration, and logging for enumlint.
//!
//! This crate provides the foundational data structures used across all enumlint crates:
//! - [`types`]: Source spans, severities, and findings
//! - [`config`]: Configuration loading from `.enumlint/enumlint.json`
//! - [`logging`]: `tracing` subscriber setup driven by `ENUMLINT_LOG`

pub mod config;
pub mod logging;
pub mod types;
