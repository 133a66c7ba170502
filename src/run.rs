//! Application execution logic.
//!
//! This module runs one subcommand against a built encoder and renders
//! its result for stdout.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use jvm_opts::config::{
    Command, ConfigError, ValidatedConfig, parse_assignments, write_default_config,
};
use jvm_opts::setting::RuntimeError;
use jvm_opts::{Encoded, Encoder};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid configuration or arguments.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Illegal value or undecodable options.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Failed to render the result.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<jvm_opts::Error> for RunError {
    fn from(error: jvm_opts::Error) -> Self {
        match error {
            jvm_opts::Error::Config(e) => Self::Config(e),
            jvm_opts::Error::Runtime(e) => Self::Runtime(e),
        }
    }
}

/// Executes a subcommand and returns the text to print.
///
/// Encoded strings are printed as they are; lists and maps as JSON.
///
/// # Errors
///
/// Returns an error if the encoder cannot be built from the configuration,
/// or the command fails.
pub fn execute(command: &Command, config: ValidatedConfig) -> Result<String, RunError> {
    match command {
        Command::Encode { values, .. } => {
            let encoder = Encoder::new(config.encoder)?;
            let values = parse_assignments(values)?;
            tracing::debug!(values = values.len(), "Encoding");
            match encoder.encode(&values, None)? {
                Encoded::Joined(joined) => Ok(joined),
                Encoded::List(tokens) => render(&tokens),
            }
        }
        Command::Decode(args) => {
            let encoder = Encoder::new(config.encoder)?;
            let tokens = args.tokens();
            tracing::debug!(tokens = tokens.len(), "Decoding");
            render(&encoder.decode_multi(&tokens)?)
        }
        Command::Describe(args) => {
            let encoder = Encoder::new(config.encoder)?;
            let tokens = args.tokens();
            tracing::debug!(tokens = tokens.len(), "Describing");
            render(&encoder.describe(&tokens)?)
        }
        Command::Init { output } => init(output),
    }
}

/// Writes the configuration template and returns the confirmation message.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init(output: &Path) -> Result<String, RunError> {
    write_default_config(output)?;
    Ok(format!(
        "Configuration template written to: {}",
        output.display()
    ))
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, RunError> {
    Ok(serde_json::to_string_pretty(value)?)
}
