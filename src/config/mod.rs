//! Configuration layer for the JVM options encoder.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`], [`TokenArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//! - Configuration errors ([`ConfigError`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Declared setting bounds and [`defaults`]
//!
//! `--before` and `--after` tokens **replace** the TOML lists entirely (not merged).
//! `--output` replaces the TOML `expected_type`.
//!
//! Settings are taken from the TOML `[settings]` table in file order, followed by
//! any `--setting NAME` not already configured, which keeps its declared bounds.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, TokenArgs};
pub use error::{ConfigError, bound};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, parse_assignments, write_default_config};
