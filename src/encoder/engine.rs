//! The multi-setting encoder.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{ConfigError, defaults};
use crate::error::Error;
use crate::setting::{Descriptor, RuntimeError, Setting, SettingCodec, SettingValue};

use super::catalog;
use super::output::{Encoded, OutputMode};

/// One requested setting and its raw configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingRequest {
    /// Catalog name of the setting
    pub name: String,
    /// Configuration table, `None` to keep the declared bounds
    pub overrides: Option<toml::Value>,
}

impl SettingRequest {
    /// Requests a setting with its declared bounds.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            overrides: None,
        }
    }

    /// Requests a setting with a configuration table.
    #[must_use]
    pub fn with_overrides(mut self, overrides: toml::Value) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Everything needed to build an [`Encoder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncoderConfig {
    /// Requested settings, in output order
    pub settings: Vec<SettingRequest>,
    /// Tokens emitted before all settings
    pub before: Vec<String>,
    /// Tokens emitted after all settings
    pub after: Vec<String>,
    /// Output mode fixed by configuration
    pub expected_type: Option<OutputMode>,
}

/// Encodes value maps into JVM options and decodes them back.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use jvm_opts::encoder::{Encoded, Encoder, EncoderConfig, SettingRequest};
/// use jvm_opts::setting::SettingValue;
///
/// let config = EncoderConfig {
///     settings: vec![SettingRequest::new("GCTimeRatio"), SettingRequest::new("AlwaysPreTouch")],
///     ..EncoderConfig::default()
/// };
/// let encoder = Encoder::new(config).unwrap();
///
/// let values = BTreeMap::from([
///     ("GCTimeRatio".to_string(), SettingValue::from(19)),
///     ("AlwaysPreTouch".to_string(), SettingValue::from(1)),
/// ]);
/// assert_eq!(
///     encoder.encode(&values, None).unwrap(),
///     Encoded::Joined("-XX:GCTimeRatio=19 -XX:+AlwaysPreTouch".to_string())
/// );
/// ```
#[derive(Debug)]
pub struct Encoder {
    settings: Vec<Setting>,
    before: Vec<String>,
    after: Vec<String>,
    expected_type: Option<OutputMode>,
}

impl Encoder {
    /// Builds every requested setting.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a setting is unknown, requested twice,
    /// or its configuration is invalid.
    pub fn new(config: EncoderConfig) -> Result<Self, ConfigError> {
        let mut seen = BTreeSet::new();
        let mut settings = Vec::with_capacity(config.settings.len());

        for request in config.settings {
            if !seen.insert(request.name.clone()) {
                return Err(ConfigError::DuplicateSetting { name: request.name });
            }
            let declaration = catalog::declaration(&request.name)?;
            settings.push(Setting::build(declaration, request.overrides.as_ref())?);
        }

        tracing::debug!(
            settings = settings.len(),
            before = config.before.len(),
            after = config.after.len(),
            "Built encoder"
        );

        Ok(Self {
            settings,
            before: config.before,
            after: config.after,
            expected_type: config.expected_type,
        })
    }

    /// Configured settings, in output order.
    #[must_use]
    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    /// Encodes one value per setting into a flat token list.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] if a configured setting has no value, a
    /// value is illegal, or values are given for settings not configured.
    pub fn encode_multi(
        &self,
        values: &BTreeMap<String, SettingValue>,
    ) -> Result<Vec<String>, RuntimeError> {
        let mut tokens = self.before.clone();
        for setting in &self.settings {
            tokens.extend(setting.encode_option(values.get(setting.name()))?);
        }

        let unexpected: Vec<String> = values
            .keys()
            .filter(|name| !self.settings.iter().any(|s| s.name() == name.as_str()))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            return Err(RuntimeError::UnexpectedSettings { names: unexpected });
        }

        tokens.extend(self.after.iter().cloned());
        Ok(tokens)
    }

    /// Encodes values in the requested output mode.
    ///
    /// The mode comes from `mode` or from the configuration, `str` if neither
    /// sets it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingOutputMode`] if both set the mode,
    /// and any error of [`encode_multi`](Self::encode_multi).
    pub fn encode(
        &self,
        values: &BTreeMap<String, SettingValue>,
        mode: Option<OutputMode>,
    ) -> Result<Encoded, Error> {
        let mode = match (mode, self.expected_type) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingOutputMode.into()),
            (Some(mode), None) | (None, Some(mode)) => mode,
            (None, None) => defaults::OUTPUT_MODE,
        };

        let tokens = self.encode_multi(values)?;
        Ok(Encoded::new(tokens, mode))
    }

    /// Decodes every configured setting from a token list.
    ///
    /// Tokens that belong to no configured setting are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuntimeError`] of any setting.
    pub fn decode_multi<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<BTreeMap<String, SettingValue>, RuntimeError> {
        self.settings
            .iter()
            .map(|s| Ok((s.name().to_string(), s.decode_option(tokens)?)))
            .collect()
    }

    /// Describes every configured setting with its value decoded from a token list.
    ///
    /// # Errors
    ///
    /// Returns the first [`RuntimeError`] of any setting.
    pub fn describe<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<BTreeMap<String, Descriptor>, RuntimeError> {
        self.settings
            .iter()
            .map(|s| Ok((s.name().to_string(), s.describe(tokens)?)))
            .collect()
    }
}
