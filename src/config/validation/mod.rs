//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: Client, server, display and logging validators
//! - `timing_validators`: Polling, channel and history validators
//! - `tests`: Test suite for all validators

mod config_validators;
mod timing_validators;
mod trait_def;

pub use trait_def::Validate;
