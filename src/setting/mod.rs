//! Settings: one named, bounded option and its flags.
//!
//! This module provides:
//! - The value lattice ([`Bounds`], [`Relaxability`])
//! - Numeric and boolean settings ([`RangeSetting`])
//! - Mutually exclusive choices ([`EnumSetting`])
//! - The closed set of setting kinds ([`Setting`], [`Declaration`])
//! - The encode/decode/describe capability ([`SettingCodec`])
//! - Runtime errors ([`RuntimeError`])
//!
//! # Data Flow
//!
//! Encode: value → lattice check → codec → preferred format → token.
//!
//! Decode: tokens → every format → one literal → codec → lattice check → value.

mod bounds;
mod choice;
mod descriptor;
mod error;
mod range;
mod value;

#[cfg(test)]
mod value_tests;

use serde::de::DeserializeOwned;

use crate::config::ConfigError;

pub use bounds::{Bounds, InvalidBounds, LatticeViolation, Relaxability};
pub use choice::{EnumDeclaration, EnumOverrides, EnumSetting};
pub use descriptor::Descriptor;
pub use error::RuntimeError;
pub use range::{RangeDeclaration, RangeOverrides, RangeSetting, SWITCH_FORMAT, VALUE_FORMAT};
pub use value::SettingValue;

/// Encoding, decoding and describing one setting.
///
/// Implementations are immutable: every call depends only on its arguments.
pub trait SettingCodec {
    /// Setting name.
    fn name(&self) -> &str;

    /// Encodes a value into zero or more flags.
    ///
    /// A missing value falls back to the setting's default.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] if the value is missing with no default,
    /// of the wrong kind, or not legal for the setting.
    fn encode_option(&self, value: Option<&SettingValue>) -> Result<Vec<String>, RuntimeError>;

    /// Decodes the setting's value from a token list.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] if the tokens carry no value and there is
    /// no default, carry several values, or carry an illegal one.
    fn decode_option<S: AsRef<str>>(&self, tokens: &[S]) -> Result<SettingValue, RuntimeError>;

    /// Decodes the setting's value and describes it with its configuration.
    ///
    /// # Errors
    ///
    /// Same as [`decode_option`](SettingCodec::decode_option).
    fn describe<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Descriptor, RuntimeError>;
}

/// Static description of any setting kind.
#[derive(Debug)]
pub enum Declaration {
    /// Numeric or boolean setting.
    Range(RangeDeclaration),
    /// Mutually exclusive choices.
    Enum(EnumDeclaration),
}

impl Declaration {
    /// Setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Range(d) => d.name(),
            Self::Enum(d) => d.name(),
        }
    }
}

impl From<RangeDeclaration> for Declaration {
    fn from(d: RangeDeclaration) -> Self {
        Self::Range(d)
    }
}

impl From<EnumDeclaration> for Declaration {
    fn from(d: EnumDeclaration) -> Self {
        Self::Enum(d)
    }
}

/// A configured setting of any kind.
#[derive(Debug)]
pub enum Setting {
    /// Numeric or boolean setting.
    Range(RangeSetting),
    /// Mutually exclusive choices.
    Enum(EnumSetting),
}

impl Setting {
    /// Applies raw configuration to a declaration.
    ///
    /// `overrides` is the setting's configuration table; `None` keeps the
    /// declared bounds. Range settings accept `min`, `max`, `step` and
    /// `default`; enumerations accept `values`, `default` and `disable_others`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverrides`] if the configuration has the
    /// wrong shape or unknown keys, and any error of [`RangeSetting::new`]
    /// or [`EnumSetting::new`].
    pub fn build(
        declaration: Declaration,
        overrides: Option<&toml::Value>,
    ) -> Result<Self, ConfigError> {
        match declaration {
            Declaration::Range(d) => {
                let overrides = parse_overrides(d.name(), overrides)?;
                RangeSetting::new(d, &overrides).map(Self::Range)
            }
            Declaration::Enum(d) => {
                let overrides = parse_overrides(d.name(), overrides)?;
                EnumSetting::new(d, &overrides).map(Self::Enum)
            }
        }
    }
}

impl SettingCodec for Setting {
    fn name(&self) -> &str {
        match self {
            Self::Range(s) => s.name(),
            Self::Enum(s) => s.name(),
        }
    }

    fn encode_option(&self, value: Option<&SettingValue>) -> Result<Vec<String>, RuntimeError> {
        match self {
            Self::Range(s) => s.encode_option(value),
            Self::Enum(s) => s.encode_option(value),
        }
    }

    fn decode_option<S: AsRef<str>>(&self, tokens: &[S]) -> Result<SettingValue, RuntimeError> {
        match self {
            Self::Range(s) => s.decode_option(tokens),
            Self::Enum(s) => s.decode_option(tokens),
        }
    }

    fn describe<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Descriptor, RuntimeError> {
        match self {
            Self::Range(s) => s.describe(tokens),
            Self::Enum(s) => s.describe(tokens),
        }
    }
}

fn parse_overrides<T>(setting: &str, overrides: Option<&toml::Value>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    overrides.map_or_else(
        || Ok(T::default()),
        |raw| {
            raw.clone()
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::InvalidOverrides {
                    setting: setting.to_string(),
                    reason: e.to_string(),
                })
        },
    )
}
