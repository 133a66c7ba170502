//! Tests for the settings catalog.

use super::catalog::{self, GARBAGE_COLLECTORS, SUPPORTED};
use crate::config::ConfigError;
use crate::setting::{Setting, SettingCodec, SettingValue};

fn table(text: &str) -> toml::Value {
    toml::Value::Table(toml::from_str(text).unwrap())
}

#[test]
fn every_supported_name_resolves() {
    for name in SUPPORTED {
        let declaration = catalog::declaration(name).unwrap();
        assert_eq!(declaration.name(), *name);
    }
}

#[test]
fn unknown_name_is_config_error() {
    let err = catalog::declaration("MaxPermSize").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedSetting { name } if name == "MaxPermSize"));
}

#[test]
fn names_are_case_sensitive() {
    assert!(catalog::declaration("maxheapsize").is_err());
}

#[test]
fn max_heap_size_requires_max() {
    let err = Setting::build(catalog::declaration("MaxHeapSize").unwrap(), None).unwrap_err();
    assert!(matches!(err, ConfigError::MissingBound { bound: "max", .. }));
}

#[test]
fn max_heap_size_accepts_shorthand() {
    let setting = Setting::build(
        catalog::declaration("MaxHeapSize").unwrap(),
        Some(&table("max = 6")),
    )
    .unwrap();
    assert_eq!(
        setting.decode_option(&["-Xmx3g"]).unwrap(),
        SettingValue::Number(3.0)
    );
}

#[test]
fn gc_time_ratio_is_strict() {
    let declaration = catalog::declaration("GCTimeRatio").unwrap();
    let err = Setting::build(declaration, Some(&table("max = 100"))).unwrap_err();
    assert!(matches!(err, ConfigError::BoundsWidened { .. }));
}

#[test]
fn gc_time_ratio_rejects_misaligned_step() {
    let declaration = catalog::declaration("GCTimeRatio").unwrap();
    let err =
        Setting::build(declaration, Some(&table("min = 10\nmax = 90\nstep = 9"))).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBounds { .. }));
}

#[test]
fn always_pre_touch_is_frozen() {
    let declaration = catalog::declaration("AlwaysPreTouch").unwrap();
    let err = Setting::build(declaration, Some(&table("max = 2"))).unwrap_err();
    assert!(matches!(err, ConfigError::FrozenBound { .. }));
}

#[test]
fn percentages_can_be_relaxed() {
    let declaration = catalog::declaration("G1ReservePercent").unwrap();
    let setting = Setting::build(declaration, Some(&table("min = 5\nmax = 50\nstep = 5"))).unwrap();
    assert_eq!(
        setting.encode_option(Some(&SettingValue::from(10))).unwrap(),
        vec!["-XX:G1ReservePercent=10"]
    );
}

#[test]
fn gc_type_supports_every_collector() {
    let setting = Setting::build(catalog::declaration("GCType").unwrap(), None).unwrap();
    for collector in GARBAGE_COLLECTORS {
        let tokens = setting
            .encode_option(Some(&SettingValue::from(*collector)))
            .unwrap();
        assert_eq!(tokens, vec![format!("-XX:+Use{collector}")]);
    }
}
