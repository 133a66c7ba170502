//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::encoder::{EncoderConfig, OutputMode, SettingRequest};
use crate::setting::SettingValue;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// Setting configuration tables are checked when the encoder is built from
/// [`ValidatedConfig::encoder`].
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings, wrapper tokens and output mode for the encoder
    pub encoder: EncoderConfig,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .encoder
            .settings
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        let mode = self
            .encoder
            .expected_type
            .map_or_else(|| "unset".to_string(), |m| m.to_string());

        write!(
            f,
            "Config {{ settings: [{}], before: {}, after: {}, expected_type: {} }}",
            names.join(", "),
            self.encoder.before.len(),
            self.encoder.after.len(),
            mode,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output mode is neither `str` nor `list`
    /// - A `--setting` name repeats another `--setting`
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let expected_type = Self::resolve_output_mode(cli, toml)?;
        let settings = Self::resolve_settings(cli, toml)?;

        // CLI tokens replace TOML tokens entirely
        let before = Self::resolve_tokens(&cli.before, toml.map(|t| t.before.as_slice()));
        let after = Self::resolve_tokens(&cli.after, toml.map(|t| t.after.as_slice()));

        Ok(Self {
            encoder: EncoderConfig {
                settings,
                before,
                after,
                expected_type,
            },
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_output_mode(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<OutputMode>, ConfigError> {
        // CLI takes precedence
        if let Some(mode) = cli.output_mode() {
            return mode.parse().map(Some);
        }

        // Fall back to TOML
        toml.and_then(|t| t.expected_type.as_deref())
            .map(str::parse::<OutputMode>)
            .transpose()
    }

    fn resolve_settings(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<SettingRequest>, ConfigError> {
        let mut settings: Vec<SettingRequest> = toml
            .map(|t| {
                t.settings
                    .iter()
                    .map(|(name, overrides)| {
                        SettingRequest::new(name.as_str()).with_overrides(overrides.clone())
                    })
                    .collect()
            })
            .unwrap_or_default();
        let from_file = settings.len();

        for name in &cli.settings {
            if settings[..from_file].iter().any(|s| &s.name == name) {
                continue;
            }
            if settings[from_file..].iter().any(|s| &s.name == name) {
                return Err(ConfigError::DuplicateSetting { name: name.clone() });
            }
            settings.push(SettingRequest::new(name.as_str()));
        }

        Ok(settings)
    }

    fn resolve_tokens(cli: &[String], toml: Option<&[String]>) -> Vec<String> {
        if !cli.is_empty() {
            return cli.to_vec();
        }

        toml.map(<[String]>::to_vec).unwrap_or_default()
    }
}

/// Parses `--set NAME=VALUE` assignments into a value map.
///
/// Values that parse as numbers become [`SettingValue::Number`], anything
/// else a [`SettingValue::Choice`].
///
/// # Errors
///
/// Returns an error if an assignment has no `=` or an empty name, or if
/// a setting is assigned twice.
pub fn parse_assignments<S: AsRef<str>>(
    assignments: &[S],
) -> Result<BTreeMap<String, SettingValue>, ConfigError> {
    let mut values = BTreeMap::new();

    for assignment in assignments {
        let (name, value) = parse_assignment(assignment.as_ref())?;
        if values.contains_key(&name) {
            return Err(ConfigError::DuplicateSetting { name });
        }
        values.insert(name, value);
    }

    Ok(values)
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_assignment(s: &str) -> Result<(String, SettingValue), ConfigError> {
    let invalid = || ConfigError::InvalidAssignment {
        value: s.to_string(),
    };

    let (name, value) = s.split_once(defaults::ASSIGNMENT_SEPARATOR).ok_or_else(invalid)?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return Err(invalid());
    }

    let Ok(value) = value.parse::<SettingValue>();

    Ok((name.to_string(), value))
}
