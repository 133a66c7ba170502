//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::setting::RuntimeError;

/// Any error of the encoder.
///
/// Configuration errors surface while building; runtime errors while
/// encoding or decoding values.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid setting declaration or request.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Illegal value or malformed token list.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns true for configuration errors.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
