//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::encoder::split_joined;

use super::defaults;

/// JVM options encoder
///
/// Encodes validated JVM tuning values into `-XX` flags and decodes
/// them back from a command line.
#[derive(Debug, Parser)]
#[command(name = "jvm-opts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Setting to configure with its declared bounds (can be specified multiple times)
    #[arg(long = "setting", value_name = "NAME", global = true)]
    pub settings: Vec<String>,

    /// Token emitted before all settings (can be specified multiple times)
    #[arg(long, value_name = "TOKEN", global = true, allow_hyphen_values = true)]
    pub before: Vec<String>,

    /// Token emitted after all settings (can be specified multiple times)
    #[arg(long, value_name = "TOKEN", global = true, allow_hyphen_values = true)]
    pub after: Vec<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for jvm-opts
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode setting values into JVM options
    Encode {
        /// Value of a setting in 'Name=Value' format (can be specified multiple times)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        values: Vec<String>,

        /// Output mode: "str" or "list"
        #[arg(long, value_name = "MODE")]
        output: Option<String>,
    },

    /// Decode setting values from JVM options
    Decode(TokenArgs),

    /// Describe settings with their values decoded from JVM options
    Describe(TokenArgs),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// JVM options to decode, as separate tokens or one joined string.
#[derive(Debug, Clone, Args)]
pub struct TokenArgs {
    /// JVM option tokens
    #[arg(
        value_name = "TOKEN",
        allow_hyphen_values = true,
        trailing_var_arg = true,
        conflicts_with = "joined"
    )]
    pub tokens: Vec<String>,

    /// All JVM options in one whitespace-separated string
    #[arg(long, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub joined: Option<String>,
}

impl TokenArgs {
    /// The tokens to decode.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        self.joined
            .as_deref()
            .map_or_else(|| self.tokens.clone(), split_joined)
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }

    /// Output mode requested on the command line, if any.
    #[must_use]
    pub fn output_mode(&self) -> Option<&str> {
        match &self.command {
            Command::Encode { output, .. } => output.as_deref(),
            _ => None,
        }
    }
}
