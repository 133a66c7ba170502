//! Settings the encoder knows how to spell.
//!
//! Each supported name maps to a declaration carrying its codec, formats,
//! declared bounds and relaxability. Configuration can only refine these.

use crate::codec::{IntegerCodec, MemoryCodec};
use crate::config::ConfigError;
use crate::setting::{
    Declaration, EnumDeclaration, RangeDeclaration, Relaxability, VALUE_FORMAT,
};

/// Names of every supported setting.
pub const SUPPORTED: &[&str] = &[
    "MaxHeapSize",
    "GCTimeRatio",
    "AlwaysPreTouch",
    "G1NewSizePercent",
    "G1ReservePercent",
    "G1MixedGCLiveThresholdPercent",
    "MaxGCPauseMillis",
    "NewRatio",
    "SurvivorRatio",
    "TargetSurvivorRatio",
    "StackShadowPages",
    "GCType",
];

/// Garbage collectors selectable through `GCType`.
pub const GARBAGE_COLLECTORS: &[&str] = &[
    "ConcMarkSweepGC",
    "G1GC",
    "ParNewGC",
    "ParallelGC",
    "ParallelOldGC",
    "SerialGC",
];

/// Returns the declaration of a supported setting.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedSetting`] for names not in [`SUPPORTED`].
///
/// # Examples
///
/// ```
/// use jvm_opts::encoder::catalog;
///
/// assert_eq!(catalog::declaration("NewRatio").unwrap().name(), "NewRatio");
/// assert!(catalog::declaration("MaxPermSize").is_err());
/// ```
pub fn declaration(name: &str) -> Result<Declaration, ConfigError> {
    let declaration = match name {
        "MaxHeapSize" => max_heap_size().into(),
        "GCTimeRatio" => integer(name, 9.0, 99.0)
            .with_relaxability(Relaxability::Strict)
            .into(),
        "AlwaysPreTouch" => RangeDeclaration::boolean(name).into(),
        "G1NewSizePercent"
        | "G1ReservePercent"
        | "G1MixedGCLiveThresholdPercent"
        | "StackShadowPages" => integer(name, 0.0, 100.0).into(),
        "MaxGCPauseMillis" => integer(name, 1.0, 1000.0).into(),
        "NewRatio" | "SurvivorRatio" | "TargetSurvivorRatio" => integer(name, 1.0, 99.0).into(),
        "GCType" => EnumDeclaration::new(name, GARBAGE_COLLECTORS.iter().copied())
            .with_formats(["XX:{{value}}Use{{name}}"])
            .into(),
        _ => {
            return Err(ConfigError::UnsupportedSetting {
                name: name.to_string(),
            });
        }
    };

    Ok(declaration)
}

/// Heap size in GiB, spelled in MiB. The maximum depends on the machine
/// and must be configured.
fn max_heap_size() -> RangeDeclaration {
    RangeDeclaration::new("MaxHeapSize", MemoryCodec::gib_as_mib())
        .with_shorthand("mx")
        .with_unit("GiB")
        .with_formats([VALUE_FORMAT, "X{{shorthand}}{{value}}"])
        .with_min(0.5)
        .with_step(0.125)
}

fn integer(name: &str, min: f64, max: f64) -> RangeDeclaration {
    RangeDeclaration::new(name, IntegerCodec)
        .with_format(VALUE_FORMAT)
        .with_bounds(min, max, 1.0)
}
