//! Error type for literal encoding and decoding.

use thiserror::Error;

/// Error raised by a [`ValueCodec`](super::ValueCodec).
///
/// Codec errors carry no setting name; the setting layer wraps them
/// into a runtime error naming the setting and the offending token.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// The literal carries no recognized unit suffix.
    #[error("'{literal}' has no recognized memory unit suffix")]
    UnknownSuffix {
        /// The literal as found in the token
        literal: String,
    },

    /// The magnitude part of the literal is not an integer.
    #[error("'{literal}' is not an integer")]
    NotAnInteger {
        /// The offending literal (or magnitude part)
        literal: String,
    },

    /// The literal is not one of the accepted sign tokens.
    #[error("'{literal}' is not a sign token, expected '+', '-' or nothing")]
    InvalidSign {
        /// The offending literal
        literal: String,
    },

    /// The value cannot be represented by this codec.
    #[error("value {value} cannot be encoded: {reason}")]
    Unrepresentable {
        /// The rejected value
        value: f64,
        /// Why it was rejected
        reason: &'static str,
    },
}
