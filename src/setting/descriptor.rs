//! Settings described together with their current value.

use serde::Serialize;

use super::SettingValue;

/// A setting's configuration together with the value decoded from a token list.
///
/// Serializes with a `type` tag:
///
/// ```json
/// {"type": "range", "min": 1, "max": 6, "step": 1, "value": 3, "unit": "GiB"}
/// {"type": "enum", "values": ["G1GC", "ParNewGC"], "value": "G1GC", "unit": ""}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Descriptor {
    /// A numeric or boolean setting.
    Range {
        /// Lowest legal value
        min: SettingValue,
        /// Highest legal value
        max: SettingValue,
        /// Lattice step
        step: SettingValue,
        /// Current value
        value: SettingValue,
        /// Display unit
        unit: String,
    },
    /// An enumeration setting.
    Enum {
        /// Configured choices
        values: Vec<String>,
        /// Current choice
        value: String,
        /// Display unit (always empty)
        unit: String,
    },
}

impl Descriptor {
    /// The current value.
    #[must_use]
    pub fn value(&self) -> SettingValue {
        match self {
            Self::Range { value, .. } => value.clone(),
            Self::Enum { value, .. } => SettingValue::Choice(value.clone()),
        }
    }
}
