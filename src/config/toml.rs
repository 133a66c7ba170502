//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Output mode of `encode`: "str" or "list"
    pub expected_type: Option<String>,

    /// Tokens emitted before all settings
    #[serde(default)]
    pub before: Vec<String>,

    /// Tokens emitted after all settings
    #[serde(default)]
    pub after: Vec<String>,

    /// Per-setting configuration tables, keyed by setting name, in file order
    #[serde(default)]
    pub settings: toml::Table,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# JVM options encoder configuration

# Output of `jvm-opts encode`: "str" (space-joined) or "list" (JSON array).
# Can be overridden by the --output CLI flag.
# expected_type = "str"

# Tokens emitted before and after the encoded settings
# Note: --before/--after CLI tokens REPLACE these entirely (not merged)
before = ["java", "-server"]
after = ["-jar", "/app.jar"]

# Settings are encoded in the order they appear here.
#
# Supported: MaxHeapSize, GCTimeRatio, AlwaysPreTouch, G1NewSizePercent,
# G1ReservePercent, G1MixedGCLiveThresholdPercent, MaxGCPauseMillis,
# NewRatio, SurvivorRatio, TargetSurvivorRatio, StackShadowPages, GCType
#
# Range settings accept min, max, step and default.
# GCType accepts values, default and disable_others.

[settings.MaxHeapSize]
# Heap size in GiB, written as -XX:MaxHeapSize=<MiB>m (decoding also accepts -Xmx)
# min = 0.5
# step = 0.125
max = 8

[settings.GCTimeRatio]
# Bounds may only narrow the declared 9..99 step 1
# min = 9
# max = 99
default = 99

[settings.AlwaysPreTouch]
# Bounds are fixed to 0..1, only the default can be set
default = 0

[settings.GCType]
# Choices: ConcMarkSweepGC, G1GC, ParNewGC, ParallelGC, ParallelOldGC, SerialGC
values = ["G1GC", "ParallelGC"]
default = "G1GC"
# Also emit -XX:-Use<Other> for every other collector
disable_others = true
"#
    .to_string()
}
