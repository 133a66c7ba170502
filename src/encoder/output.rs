//! Output shapes of an encoding.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ConfigError;

/// How encoded tokens are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One string per token
    List,
    /// All tokens joined by single spaces
    #[default]
    Str,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "str" => Ok(Self::Str),
            other => Err(ConfigError::UnsupportedOutputMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Str => write!(f, "str"),
        }
    }
}

/// Encoded tokens in the requested [`OutputMode`].
///
/// Serializes as a JSON array or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Encoded {
    /// Separate tokens
    List(Vec<String>),
    /// Space-joined tokens
    Joined(String),
}

impl Encoded {
    /// Shapes tokens for the given mode.
    #[must_use]
    pub fn new(tokens: Vec<String>, mode: OutputMode) -> Self {
        match mode {
            OutputMode::List => Self::List(tokens),
            OutputMode::Str => Self::Joined(tokens.join(" ")),
        }
    }

    /// The mode this output was shaped for.
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        match self {
            Self::List(_) => OutputMode::List,
            Self::Joined(_) => OutputMode::Str,
        }
    }

    /// The individual tokens.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Self::List(tokens) => tokens.clone(),
            Self::Joined(joined) => split_joined(joined),
        }
    }
}

/// Splits a joined option string into tokens.
///
/// Tokens are separated by any whitespace. Quoting is not supported, so a
/// token cannot itself contain whitespace.
#[must_use]
pub fn split_joined(joined: &str) -> Vec<String> {
    joined.split_whitespace().map(str::to_string).collect()
}
