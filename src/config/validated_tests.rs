//! Tests for validated configuration.

use crate::encoder::{OutputMode, SettingRequest};
use crate::setting::SettingValue;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, parse_assignments, write_default_config};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["jvm-opts"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

fn names(config: &ValidatedConfig) -> Vec<&str> {
    config
        .encoder
        .settings
        .iter()
        .map(|s| s.name.as_str())
        .collect()
}

mod settings {
    use super::*;

    #[test]
    fn settings_from_toml_in_file_order() {
        let toml = toml(
            r"
            [settings.GCTimeRatio]
            [settings.MaxHeapSize]
            max = 6
        ",
        );
        let config = ValidatedConfig::from_raw(&cli(&["describe"]), Some(&toml)).unwrap();

        assert_eq!(names(&config), vec!["GCTimeRatio", "MaxHeapSize"]);
        let heap = &config.encoder.settings[1];
        assert_eq!(
            heap.overrides.as_ref().and_then(|o| o.get("max")).and_then(toml::Value::as_integer),
            Some(6)
        );
    }

    #[test]
    fn cli_settings_appended_with_declared_bounds() {
        let toml = toml("[settings.GCTimeRatio]");
        let config = ValidatedConfig::from_raw(
            &cli(&["describe", "--setting", "NewRatio", "--setting", "GCTimeRatio"]),
            Some(&toml),
        )
        .unwrap();

        assert_eq!(names(&config), vec!["GCTimeRatio", "NewRatio"]);
        assert_eq!(config.encoder.settings[1], SettingRequest::new("NewRatio"));
    }

    #[test]
    fn cli_settings_without_toml() {
        let config =
            ValidatedConfig::from_raw(&cli(&["encode", "--setting", "AlwaysPreTouch"]), None)
                .unwrap();
        assert_eq!(names(&config), vec!["AlwaysPreTouch"]);
    }

    #[test]
    fn repeated_cli_setting_is_rejected() {
        let result = ValidatedConfig::from_raw(
            &cli(&["encode", "--setting", "NewRatio", "--setting", "NewRatio"]),
            None,
        );
        assert!(matches!(result, Err(ConfigError::DuplicateSetting { .. })));
    }

    #[test]
    fn no_settings_is_valid() {
        let config = ValidatedConfig::from_raw(&cli(&["describe"]), None).unwrap();
        assert!(config.encoder.settings.is_empty());
    }
}

mod output_mode {
    use super::*;

    #[test]
    fn unset_by_default() {
        let config = ValidatedConfig::from_raw(&cli(&["encode"]), None).unwrap();
        assert_eq!(config.encoder.expected_type, None);
    }

    #[test]
    fn from_toml() {
        let toml = toml(r#"expected_type = "list""#);
        let config = ValidatedConfig::from_raw(&cli(&["encode"]), Some(&toml)).unwrap();
        assert_eq!(config.encoder.expected_type, Some(OutputMode::List));
    }

    #[test]
    fn cli_overrides_toml() {
        let toml = toml(r#"expected_type = "list""#);
        let config =
            ValidatedConfig::from_raw(&cli(&["encode", "--output", "str"]), Some(&toml)).unwrap();
        assert_eq!(config.encoder.expected_type, Some(OutputMode::Str));
    }

    #[test]
    fn unsupported_mode_from_toml() {
        let toml = toml(r#"expected_type = "dict""#);
        let result = ValidatedConfig::from_raw(&cli(&["encode"]), Some(&toml));
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedOutputMode { value }) if value == "dict"
        ));
    }

    #[test]
    fn unsupported_mode_from_cli() {
        let result = ValidatedConfig::from_raw(&cli(&["encode", "--output", "json"]), None);
        assert!(matches!(result, Err(ConfigError::UnsupportedOutputMode { .. })));
    }
}

mod wrapper_tokens {
    use super::*;

    #[test]
    fn from_toml() {
        let toml = toml(
            r#"
            before = ["java", "-server"]
            after = ["-jar", "/app.jar"]
        "#,
        );
        let config = ValidatedConfig::from_raw(&cli(&["encode"]), Some(&toml)).unwrap();

        assert_eq!(config.encoder.before, vec!["java", "-server"]);
        assert_eq!(config.encoder.after, vec!["-jar", "/app.jar"]);
    }

    #[test]
    fn cli_replaces_toml() {
        let toml = toml(
            r#"
            before = ["java", "-server"]
            after = ["-jar", "/app.jar"]
        "#,
        );
        let config =
            ValidatedConfig::from_raw(&cli(&["encode", "--before", "/usr/bin/java"]), Some(&toml))
                .unwrap();

        assert_eq!(config.encoder.before, vec!["/usr/bin/java"]);
        assert_eq!(config.encoder.after, vec!["-jar", "/app.jar"]);
    }

    #[test]
    fn empty_without_sources() {
        let config = ValidatedConfig::from_raw(&cli(&["encode"]), None).unwrap();
        assert!(config.encoder.before.is_empty());
        assert!(config.encoder.after.is_empty());
    }
}

mod assignments {
    use super::*;

    #[test]
    fn parses_numbers_and_choices() {
        let values = parse_assignments(&["MaxHeapSize=1.625", "GCType = G1GC"]).unwrap();

        assert_eq!(values["MaxHeapSize"], SettingValue::Number(1.625));
        assert_eq!(values["GCType"], SettingValue::from("G1GC"));
    }

    #[test]
    fn rejects_missing_separator() {
        let result = parse_assignments(&["MaxHeapSize"]);
        assert!(matches!(result, Err(ConfigError::InvalidAssignment { .. })));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(parse_assignments(&["=4"]).is_err());
        assert!(parse_assignments(&["MaxHeapSize="]).is_err());
    }

    #[test]
    fn rejects_repeated_setting() {
        let result = parse_assignments(&["NewRatio=2", "NewRatio=3"]);
        assert!(matches!(result, Err(ConfigError::DuplicateSetting { .. })));
    }

    #[test]
    fn empty_list_is_empty_map() {
        let empty: [&str; 0] = [];
        assert!(parse_assignments(&empty).unwrap().is_empty());
    }
}

mod loading {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn load_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            expected_type = "list"

            [settings.MaxHeapSize]
            max = 6
        "#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let config = ValidatedConfig::load(&cli(&["encode", "--config", path, "-v"])).unwrap();

        assert_eq!(names(&config), vec!["MaxHeapSize"]);
        assert_eq!(config.encoder.expected_type, Some(OutputMode::List));
        assert!(config.verbose);
    }

    #[test]
    fn load_without_config_file() {
        let config = ValidatedConfig::load(&cli(&["encode", "--setting", "NewRatio"])).unwrap();
        assert_eq!(names(&config), vec!["NewRatio"]);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let args = ["encode", "--config", "missing_jvm_opts_9876.toml"];
        let result = ValidatedConfig::load(&cli(&args));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn written_template_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jvm-opts.toml");

        write_default_config(&path).unwrap();

        let config = ValidatedConfig::load(&cli(&["encode", "--config", path.to_str().unwrap()]))
            .unwrap();
        assert_eq!(
            names(&config),
            vec!["MaxHeapSize", "GCTimeRatio", "AlwaysPreTouch", "GCType"]
        );
        assert!(crate::encoder::Encoder::new(config.encoder).is_ok());
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("jvm-opts.toml");

        let result = write_default_config(&path);
        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }

    #[test]
    fn display_summarizes_config() {
        let toml = toml(
            r#"
            before = ["java"]
            [settings.NewRatio]
        "#,
        );
        let config = ValidatedConfig::from_raw(&cli(&["encode"]), Some(&toml)).unwrap();

        assert_eq!(
            config.to_string(),
            "Config { settings: [NewRatio], before: 1, after: 0, expected_type: unset }"
        );
    }
}
