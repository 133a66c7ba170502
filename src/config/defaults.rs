//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use crate::encoder::OutputMode;

/// Default configuration file written by `init`.
pub const CONFIG_FILE: &str = "jvm-opts.toml";

/// Output mode used when neither configuration nor the call picks one.
pub const OUTPUT_MODE: OutputMode = OutputMode::Str;

/// Separator between setting name and value in `--set NAME=VALUE`.
pub const ASSIGNMENT_SEPARATOR: char = '=';
