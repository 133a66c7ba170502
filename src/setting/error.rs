//! Error type for encoding and decoding values.

use thiserror::Error;

use crate::codec::CodecError;

use super::{LatticeViolation, SettingValue};

/// Error raised by a single encode or decode call.
///
/// Runtime errors are about the input of one call (a value or a token
/// list), never about the setting declarations. They always name the
/// setting and carry the offending value or token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// No value was given to encode and no default is configured.
    #[error("No value provided for setting '{setting}' and no default value was configured")]
    MissingValue {
        /// Setting name
        setting: String,
    },

    /// The value has the wrong kind (number vs. choice).
    #[error("Setting '{setting}' expects a {expected}, got {value}")]
    WrongValueType {
        /// Setting name
        setting: String,
        /// Expected kind
        expected: &'static str,
        /// The rejected value
        value: SettingValue,
    },

    /// The value is not on the setting's lattice.
    #[error("Invalid value for setting '{setting}': {source}")]
    InvalidValue {
        /// Setting name
        setting: String,
        /// Why the value is illegal
        #[source]
        source: LatticeViolation,
    },

    /// The choice is not one of the configured values.
    #[error("Invalid value '{choice}' for setting '{setting}'. Allowed: {}", allowed.join(", "))]
    UnknownChoice {
        /// Setting name
        setting: String,
        /// The rejected choice
        choice: String,
        /// Configured values
        allowed: Vec<String>,
    },

    /// The value passed validation but has no literal form.
    #[error("Cannot encode value {value} for setting '{setting}': {source}")]
    Encode {
        /// Setting name
        setting: String,
        /// The rejected value
        value: f64,
        /// Codec error
        #[source]
        source: CodecError,
    },

    /// No token matched and no default is configured.
    #[error("No value found to decode for setting '{setting}' and no default value was configured")]
    NoValueFound {
        /// Setting name
        setting: String,
    },

    /// More than one token matched.
    #[error("Received multiple values for setting '{setting}', only one is allowed: {}", tokens.join(" "))]
    AmbiguousValue {
        /// Setting name
        setting: String,
        /// All matching tokens
        tokens: Vec<String>,
    },

    /// The matching token carries a malformed literal.
    #[error("Invalid value to decode for setting '{setting}' in '{token}': {source}")]
    InvalidLiteral {
        /// Setting name
        setting: String,
        /// The offending token
        token: String,
        /// Codec error
        #[source]
        source: CodecError,
    },

    /// The decoded value is not on the setting's lattice.
    #[error("Decoded value of setting '{setting}' from '{token}' is invalid: {source}")]
    InvalidDecodedValue {
        /// Setting name
        setting: String,
        /// The offending token
        token: String,
        /// Why the value is illegal
        #[source]
        source: LatticeViolation,
    },

    /// More than one choice of an enumeration is enabled.
    #[error("Setting '{setting}' has multiple values enabled, only one is allowed: {}", choices.join(", "))]
    MultipleChoices {
        /// Setting name
        setting: String,
        /// All enabled choices
        choices: Vec<String>,
    },

    /// The switch of one choice failed to encode or decode.
    #[error("Invalid switch '{choice}' of setting '{setting}': {source}")]
    Switch {
        /// Setting name
        setting: String,
        /// The choice whose switch failed
        choice: String,
        /// Error of the switch
        #[source]
        source: Box<RuntimeError>,
    },

    /// Values were given for settings that are not configured.
    #[error("Received values for settings that are not configured: {}", names.join(", "))]
    UnexpectedSettings {
        /// Names of the unconsumed values
        names: Vec<String>,
    },
}

impl RuntimeError {
    /// Name of the setting the error is about, if any.
    #[must_use]
    pub fn setting(&self) -> Option<&str> {
        match self {
            Self::MissingValue { setting }
            | Self::WrongValueType { setting, .. }
            | Self::InvalidValue { setting, .. }
            | Self::UnknownChoice { setting, .. }
            | Self::Encode { setting, .. }
            | Self::NoValueFound { setting }
            | Self::AmbiguousValue { setting, .. }
            | Self::InvalidLiteral { setting, .. }
            | Self::InvalidDecodedValue { setting, .. }
            | Self::MultipleChoices { setting, .. }
            | Self::Switch { setting, .. } => Some(setting),
            Self::UnexpectedSettings { .. } => None,
        }
    }
}
