//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatError;
use crate::setting::{InvalidBounds, LatticeViolation};

/// Error type for configuration operations.
///
/// Covers malformed setting declarations, unsupported requests and file
/// operations. Raised while building an encoder, before any value is
/// encoded or decoded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The requested setting is not in the catalog.
    #[error("Setting '{name}' is not supported by the JVM options encoder")]
    UnsupportedSetting {
        /// The unknown setting name
        name: String,
    },

    /// The same setting was requested twice.
    #[error("Setting '{name}' is requested more than once")]
    DuplicateSetting {
        /// The repeated setting name
        name: String,
    },

    /// The overrides of a setting have the wrong shape or unknown keys.
    #[error("Invalid configuration for setting '{setting}': {reason}")]
    InvalidOverrides {
        /// Setting name
        setting: String,
        /// Deserialization error message
        reason: String,
    },

    /// A bound is neither declared nor configured.
    #[error("Missing {bound} for setting '{setting}'. Set it in the setting's configuration")]
    MissingBound {
        /// Setting name
        setting: String,
        /// Name of the missing bound
        bound: &'static str,
    },

    /// The bounds do not describe a valid lattice.
    #[error("Invalid bounds for setting '{setting}': {source}")]
    InvalidBounds {
        /// Setting name
        setting: String,
        /// What is wrong with the bounds
        #[source]
        source: InvalidBounds,
    },

    /// Bounds of a frozen setting were overridden.
    #[error("Setting '{setting}' has frozen bounds, {bound} cannot be configured")]
    FrozenBound {
        /// Setting name
        setting: String,
        /// Name of the overridden bound
        bound: &'static str,
    },

    /// A strict setting was configured outside its declared lattice.
    #[error("Setting '{setting}' cannot be widened: {reason}")]
    BoundsWidened {
        /// Setting name
        setting: String,
        /// Which bound escapes the declared lattice
        reason: String,
    },

    /// Some lattice points have no exact flag spelling.
    #[error("Bounds of setting '{setting}' cannot be written as flags: {reason}")]
    UnrepresentableBounds {
        /// Setting name
        setting: String,
        /// Which lattice point is lost
        reason: String,
    },

    /// The default value does not lie on the lattice.
    #[error("Invalid default for setting '{setting}': {source}")]
    InvalidDefault {
        /// Setting name
        setting: String,
        /// Lattice violation of the default
        #[source]
        source: LatticeViolation,
    },

    /// The flag templates of a setting are invalid.
    #[error("Invalid flag format for setting '{setting}': {source}")]
    InvalidFormat {
        /// Setting name
        setting: String,
        /// Template error
        #[source]
        source: FormatError,
    },

    /// An enumeration was configured with no choices.
    #[error("Setting '{setting}' requires at least one value")]
    NoChoices {
        /// Setting name
        setting: String,
    },

    /// An enumeration choice is not supported.
    #[error("Value '{choice}' is not supported by setting '{setting}'. Supported: {}", supported.join(", "))]
    UnsupportedChoice {
        /// Setting name
        setting: String,
        /// The unsupported choice
        choice: String,
        /// Choices the setting supports
        supported: Vec<String>,
    },

    /// An enumeration choice is listed twice.
    #[error("Value '{choice}' is listed more than once for setting '{setting}'")]
    DuplicateChoice {
        /// Setting name
        setting: String,
        /// The repeated choice
        choice: String,
    },

    /// The default choice is not one of the configured values.
    #[error("Default '{choice}' of setting '{setting}' is not one of its values: {}", values.join(", "))]
    DefaultNotInValues {
        /// Setting name
        setting: String,
        /// The rejected default
        choice: String,
        /// Configured values
        values: Vec<String>,
    },

    /// Output mode other than `str` or `list`.
    #[error("Unsupported output mode '{value}': expected str or list")]
    UnsupportedOutputMode {
        /// The rejected mode
        value: String,
    },

    /// Output mode given both in configuration and for the call.
    #[error("Output mode is set both in configuration and for the encode call")]
    ConflictingOutputMode,

    /// Malformed `NAME=VALUE` assignment.
    #[error("Invalid assignment '{value}': expected 'Name=Value'")]
    InvalidAssignment {
        /// The rejected assignment
        value: String,
    },
}

/// Names of setting bounds, used in bound-related errors.
pub mod bound {
    /// Lowest legal value.
    pub const MIN: &str = "min";
    /// Highest legal value.
    pub const MAX: &str = "max";
    /// Lattice step.
    pub const STEP: &str = "step";
}

impl ConfigError {
    /// Creates a `MissingBound` error.
    #[must_use]
    pub fn missing_bound(setting: &str, bound: &'static str) -> Self {
        Self::MissingBound {
            setting: setting.to_string(),
            bound,
        }
    }

    /// Name of the setting the error is about, if any.
    #[must_use]
    pub fn setting(&self) -> Option<&str> {
        match self {
            Self::UnsupportedSetting { name } | Self::DuplicateSetting { name } => Some(name),
            Self::InvalidOverrides { setting, .. }
            | Self::MissingBound { setting, .. }
            | Self::InvalidBounds { setting, .. }
            | Self::FrozenBound { setting, .. }
            | Self::BoundsWidened { setting, .. }
            | Self::UnrepresentableBounds { setting, .. }
            | Self::InvalidDefault { setting, .. }
            | Self::InvalidFormat { setting, .. }
            | Self::NoChoices { setting }
            | Self::UnsupportedChoice { setting, .. }
            | Self::DuplicateChoice { setting, .. }
            | Self::DefaultNotInValues { setting, .. } => Some(setting),
            _ => None,
        }
    }
}
