//! Mutually exclusive choices, each spelled as its own boolean flag.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::ConfigError;

use super::range::SWITCH_FORMAT;
use super::{
    Bounds, Descriptor, RangeDeclaration, RangeOverrides, RangeSetting, RuntimeError,
    SettingCodec, SettingValue,
};

/// Static description of an enumeration setting.
///
/// `supported` is the full set of choices the runtime knows; configuration
/// picks a subset of them. Each choice becomes a boolean switch rendered
/// with the declaration's formats, `{{name}}` being the choice name.
#[derive(Debug, Clone)]
pub struct EnumDeclaration {
    name: String,
    supported: Vec<String>,
    formats: Vec<String>,
}

impl EnumDeclaration {
    /// Starts a declaration with the plain `-XX:+Choice` switch format.
    #[must_use]
    pub fn new<I, T>(name: impl Into<String>, supported: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            supported: supported.into_iter().map(Into::into).collect(),
            formats: vec![SWITCH_FORMAT.to_string()],
        }
    }

    /// Replaces the switch formats.
    #[must_use]
    pub fn with_formats<I, T>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.formats = templates.into_iter().map(Into::into).collect();
        self
    }

    /// Setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All choices the setting can be configured with.
    #[must_use]
    pub fn supported(&self) -> &[String] {
        &self.supported
    }
}

/// Per-setting configuration of an enumeration setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumOverrides {
    /// Allowed choices, in order. Defaults to every supported choice.
    pub values: Option<Vec<String>>,
    /// Choice decoded when none is enabled
    pub default: Option<String>,
    /// Whether encoding also disables every other supported choice
    #[serde(default)]
    pub disable_others: bool,
}

/// A configured enumeration setting.
///
/// At most one choice is active. Encoding emits the switch enabling the
/// chosen value, preceded (with `disable_others`) by switches disabling
/// every other supported choice in lexicographic order.
///
/// # Examples
///
/// ```
/// use jvm_opts::setting::{EnumDeclaration, EnumOverrides, EnumSetting};
///
/// let declaration = EnumDeclaration::new("GCType", ["G1GC", "ParallelGC", "SerialGC"])
///     .with_formats(["XX:{{value}}Use{{name}}"]);
/// let overrides = EnumOverrides {
///     values: Some(vec!["G1GC".into(), "ParallelGC".into()]),
///     default: None,
///     disable_others: true,
/// };
///
/// let setting = EnumSetting::new(declaration, &overrides).unwrap();
/// assert_eq!(
///     setting.encode_choice("G1GC").unwrap(),
///     vec!["-XX:-UseParallelGC", "-XX:-UseSerialGC", "-XX:+UseG1GC"]
/// );
/// ```
#[derive(Debug)]
pub struct EnumSetting {
    name: String,
    values: Vec<String>,
    default: Option<String>,
    disable_others: bool,
    index: Bounds,
    switches: BTreeMap<String, RangeSetting>,
}

impl EnumSetting {
    /// Applies configuration to a declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - the configured values are empty, repeated or not supported
    /// - the default is not one of the configured values
    /// - a switch format is invalid
    pub fn new(
        declaration: EnumDeclaration,
        overrides: &EnumOverrides,
    ) -> Result<Self, ConfigError> {
        let name = declaration.name;
        let values = overrides
            .values
            .clone()
            .unwrap_or_else(|| declaration.supported.clone());

        validate_values(&name, &values, &declaration.supported)?;

        if let Some(default) = &overrides.default {
            if !values.contains(default) {
                return Err(ConfigError::DefaultNotInValues {
                    setting: name,
                    choice: default.clone(),
                    values,
                });
            }
        }

        #[allow(clippy::cast_precision_loss)] // choice counts are tiny
        let last = (values.len() - 1) as f64;
        let index = Bounds::new(0.0, last, 1.0).map_err(|source| ConfigError::InvalidBounds {
            setting: name.clone(),
            source,
        })?;

        let switches = declaration
            .supported
            .iter()
            .map(|choice| {
                let switch = RangeDeclaration::boolean(choice.as_str())
                    .with_formats(declaration.formats.iter().cloned())
                    .with_default(0.0);
                RangeSetting::new(switch, &RangeOverrides::default()).map(|s| (choice.clone(), s))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Self {
            name,
            values,
            default: overrides.default.clone(),
            disable_others: overrides.disable_others,
            index,
            switches,
        })
    }

    /// Setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured choices, in configured order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Choice decoded when none is enabled.
    #[must_use]
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether encoding disables every other supported choice.
    #[must_use]
    pub const fn disable_others(&self) -> bool {
        self.disable_others
    }

    /// Encodes a choice into its switches.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownChoice`] if the choice is not configured.
    pub fn encode_choice(&self, choice: &str) -> Result<Vec<String>, RuntimeError> {
        let position = self
            .values
            .iter()
            .position(|v| v == choice)
            .ok_or_else(|| RuntimeError::UnknownChoice {
                setting: self.name.clone(),
                choice: choice.to_string(),
                allowed: self.values.clone(),
            })?;

        #[allow(clippy::cast_precision_loss)]
        let position = position as f64;
        self.index
            .check(position)
            .map_err(|source| RuntimeError::InvalidValue {
                setting: self.name.clone(),
                source,
            })?;

        let mut tokens = Vec::new();
        let mut enable = Vec::new();
        for (name, switch) in &self.switches {
            if name == choice {
                enable = switch
                    .encode_value(1.0)
                    .map_err(|source| self.switch_failed(name, source))?;
            } else if self.disable_others {
                let disable = switch
                    .encode_value(0.0)
                    .map_err(|source| self.switch_failed(name, source))?;
                tokens.extend(disable);
            }
        }
        tokens.extend(enable);

        tracing::debug!(setting = %self.name, choice, ?tokens, "Encoded choice");
        Ok(tokens)
    }

    /// Decodes the single enabled choice from a token list.
    ///
    /// Only configured choices are considered; a choice without a flag is off.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] if:
    /// - more than one configured choice is enabled
    /// - none is enabled and no default is configured
    /// - a switch itself is ambiguous or malformed, reported as
    ///   [`RuntimeError::Switch`]
    pub fn decode_choice<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String, RuntimeError> {
        let mut enabled = Vec::new();
        for (name, switch) in self
            .values
            .iter()
            .filter_map(|v| self.switches.get_key_value(v))
        {
            let state = switch
                .decode_value(tokens)
                .map_err(|source| self.switch_failed(name, source))?;
            if state > 0.5 {
                enabled.push(name.clone());
            }
        }

        match enabled.len() {
            0 => self.default.clone().ok_or_else(|| RuntimeError::NoValueFound {
                setting: self.name.clone(),
            }),
            1 => Ok(enabled.remove(0)),
            _ => Err(RuntimeError::MultipleChoices {
                setting: self.name.clone(),
                choices: enabled,
            }),
        }
    }

    fn switch_failed(&self, choice: &str, source: RuntimeError) -> RuntimeError {
        RuntimeError::Switch {
            setting: self.name.clone(),
            choice: choice.to_string(),
            source: Box::new(source),
        }
    }
}

impl SettingCodec for EnumSetting {
    fn name(&self) -> &str {
        &self.name
    }

    fn encode_option(&self, value: Option<&SettingValue>) -> Result<Vec<String>, RuntimeError> {
        match value {
            None => self
                .default
                .as_deref()
                .ok_or_else(|| RuntimeError::MissingValue {
                    setting: self.name.clone(),
                })
                .and_then(|default| self.encode_choice(default)),
            Some(SettingValue::Choice(choice)) => self.encode_choice(choice),
            Some(other) => Err(RuntimeError::WrongValueType {
                setting: self.name.clone(),
                expected: "choice",
                value: other.clone(),
            }),
        }
    }

    fn decode_option<S: AsRef<str>>(&self, tokens: &[S]) -> Result<SettingValue, RuntimeError> {
        self.decode_choice(tokens).map(SettingValue::Choice)
    }

    fn describe<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Descriptor, RuntimeError> {
        let value = self.decode_choice(tokens)?;
        Ok(Descriptor::Enum {
            values: self.values.clone(),
            value,
            unit: String::new(),
        })
    }
}

fn validate_values(
    setting: &str,
    values: &[String],
    supported: &[String],
) -> Result<(), ConfigError> {
    if values.is_empty() {
        return Err(ConfigError::NoChoices {
            setting: setting.to_string(),
        });
    }

    for (i, choice) in values.iter().enumerate() {
        if !supported.contains(choice) {
            return Err(ConfigError::UnsupportedChoice {
                setting: setting.to_string(),
                choice: choice.clone(),
                supported: supported.to_vec(),
            });
        }
        if values[..i].contains(choice) {
            return Err(ConfigError::DuplicateChoice {
                setting: setting.to_string(),
                choice: choice.clone(),
            });
        }
    }

    Ok(())
}
