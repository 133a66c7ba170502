//! Semantic setting values.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A value of a setting: a number for range settings (0/1 for booleans),
/// or a choice name for enumerations.
///
/// Deserializes from either a JSON/TOML number or a string. Integral
/// numbers serialize as integers, so `4.0` is written as `4`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Numeric value of a range setting.
    Number(f64),
    /// Choice of an enumeration setting.
    Choice(String),
}

impl SettingValue {
    /// Returns the number, if this is a numeric value.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Choice(_) => None,
        }
    }

    /// Returns the choice name, if this is a choice.
    #[must_use]
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Choice(c) => Some(c),
        }
    }

    /// Short name of the value's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Choice(_) => "choice",
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Choice(c) => write!(f, "'{c}'"),
        }
    }
}

impl Serialize for SettingValue {
    #[allow(clippy::cast_possible_truncation)] // integrality and range checked
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Choice(c) => serializer.serialize_str(c),
        }
    }
}

/// Parses a command-line value: numbers become [`SettingValue::Number`],
/// anything else a [`SettingValue::Choice`].
impl FromStr for SettingValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<f64>()
            .map_or_else(|_| Self::Choice(s.to_string()), Self::Number))
    }
}

impl From<f64> for SettingValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for SettingValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for SettingValue {
    fn from(c: &str) -> Self {
        Self::Choice(c.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(c: String) -> Self {
        Self::Choice(c)
    }
}
