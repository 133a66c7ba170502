//! Range-valued settings: numbers on a lattice, and booleans.

use serde::Deserialize;

use crate::codec::{SignCodec, ValueCodec};
use crate::config::{ConfigError, bound};
use crate::format::FormatMatcher;

use super::{Bounds, Descriptor, Relaxability, RuntimeError, SettingCodec, SettingValue};

/// Preferred spelling of valued `-XX` options: `-XX:Name=value`.
pub const VALUE_FORMAT: &str = "XX:{{name}}={{value}}";

/// Spelling of boolean `-XX` options: `-XX:+Name` / `-XX:-Name`.
pub const SWITCH_FORMAT: &str = "XX:{{value}}{{name}}";

/// Static description of a range setting, before configuration.
///
/// Bounds left unset here must be provided by configuration.
///
/// # Examples
///
/// ```
/// use jvm_opts::codec::IntegerCodec;
/// use jvm_opts::setting::{RangeDeclaration, RangeOverrides, RangeSetting, VALUE_FORMAT};
///
/// let declaration = RangeDeclaration::new("GCTimeRatio", IntegerCodec)
///     .with_format(VALUE_FORMAT)
///     .with_bounds(9.0, 99.0, 1.0);
///
/// let setting = RangeSetting::new(declaration, &RangeOverrides::default()).unwrap();
/// assert_eq!(setting.encode_value(19.0).unwrap(), vec!["-XX:GCTimeRatio=19"]);
/// ```
#[derive(Debug)]
pub struct RangeDeclaration {
    name: String,
    shorthand: Option<String>,
    unit: String,
    formats: Vec<String>,
    codec: Box<dyn ValueCodec>,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
    default: Option<f64>,
    relaxability: Relaxability,
}

impl RangeDeclaration {
    /// Starts a declaration with the given codec and no formats or bounds.
    #[must_use]
    pub fn new(name: impl Into<String>, codec: impl ValueCodec + 'static) -> Self {
        Self {
            name: name.into(),
            shorthand: None,
            unit: String::new(),
            formats: Vec::new(),
            codec: Box::new(codec),
            min: None,
            max: None,
            step: None,
            default: None,
            relaxability: Relaxability::Relaxable,
        }
    }

    /// Declares a boolean `-XX:+Name` / `-XX:-Name` switch.
    ///
    /// Booleans live on the frozen `{0, 1}` lattice.
    #[must_use]
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, SignCodec)
            .with_format(SWITCH_FORMAT)
            .with_bounds(Bounds::BOOLEAN.min(), Bounds::BOOLEAN.max(), Bounds::BOOLEAN.step())
            .with_relaxability(Relaxability::Frozen)
    }

    /// Setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the short alias available to templates as `{{shorthand}}`.
    #[must_use]
    pub fn with_shorthand(mut self, shorthand: impl Into<String>) -> Self {
        self.shorthand = Some(shorthand.into());
        self
    }

    /// Sets the display unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Appends an accepted format. The first one added is preferred.
    #[must_use]
    pub fn with_format(mut self, template: impl Into<String>) -> Self {
        self.formats.push(template.into());
        self
    }

    /// Replaces all formats.
    #[must_use]
    pub fn with_formats<I, T>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.formats = templates.into_iter().map(Into::into).collect();
        self
    }

    /// Declares all three bounds.
    #[must_use]
    pub const fn with_bounds(mut self, min: f64, max: f64, step: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.step = Some(step);
        self
    }

    /// Declares the lowest value.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Declares the highest value.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Declares the lattice step.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Declares the value decoded when no flag is present.
    #[must_use]
    pub const fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets how far configuration may move the bounds.
    #[must_use]
    pub const fn with_relaxability(mut self, relaxability: Relaxability) -> Self {
        self.relaxability = relaxability;
        self
    }

    fn declared_bounds(&self) -> Result<Bounds, ConfigError> {
        let min = self.min.ok_or_else(|| ConfigError::missing_bound(&self.name, bound::MIN))?;
        let max = self.max.ok_or_else(|| ConfigError::missing_bound(&self.name, bound::MAX))?;
        let step = self.step.ok_or_else(|| ConfigError::missing_bound(&self.name, bound::STEP))?;

        Bounds::new(min, max, step).map_err(|source| ConfigError::InvalidBounds {
            setting: self.name.clone(),
            source,
        })
    }

    fn resolve_bounds(&self, overrides: &RangeOverrides) -> Result<Bounds, ConfigError> {
        if self.relaxability == Relaxability::Frozen {
            for (requested, bound) in [
                (overrides.min, bound::MIN),
                (overrides.max, bound::MAX),
                (overrides.step, bound::STEP),
            ] {
                if requested.is_some() {
                    return Err(ConfigError::FrozenBound {
                        setting: self.name.clone(),
                        bound,
                    });
                }
            }
        }

        let min = overrides.min.or(self.min);
        let max = overrides.max.or(self.max);
        let step = overrides.step.or(self.step);

        let min = min.ok_or_else(|| ConfigError::missing_bound(&self.name, bound::MIN))?;
        let max = max.ok_or_else(|| ConfigError::missing_bound(&self.name, bound::MAX))?;
        let step = step.ok_or_else(|| ConfigError::missing_bound(&self.name, bound::STEP))?;

        let bounds = Bounds::new(min, max, step).map_err(|source| ConfigError::InvalidBounds {
            setting: self.name.clone(),
            source,
        })?;

        if self.relaxability == Relaxability::Strict {
            let declared = self.declared_bounds()?;
            if !declared.contains_lattice(&bounds) {
                return Err(ConfigError::BoundsWidened {
                    setting: self.name.clone(),
                    reason: format!("configured {bounds} is not within declared {declared}"),
                });
            }
        }

        Ok(bounds)
    }
}

/// Per-setting configuration of a range setting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeOverrides {
    /// Lowest legal value
    pub min: Option<f64>,
    /// Highest legal value
    pub max: Option<f64>,
    /// Lattice step
    pub step: Option<f64>,
    /// Value decoded when no flag is present
    pub default: Option<f64>,
}

/// A configured range setting.
///
/// Encodes one number into one flag, and recovers it from a token list
/// written in any of the declared formats.
#[derive(Debug)]
pub struct RangeSetting {
    name: String,
    unit: String,
    bounds: Bounds,
    default: Option<f64>,
    matcher: FormatMatcher,
    codec: Box<dyn ValueCodec>,
}

impl RangeSetting {
    /// Applies configuration to a declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if:
    /// - a frozen bound is overridden, or a strict one escapes its declared lattice
    /// - a bound is missing or the bounds are not a lattice
    /// - a lattice point cannot be encoded and decoded back exactly
    /// - the default is not on the lattice
    /// - no format is declared or a template is invalid
    pub fn new(
        declaration: RangeDeclaration,
        overrides: &RangeOverrides,
    ) -> Result<Self, ConfigError> {
        let bounds = declaration.resolve_bounds(overrides)?;
        check_representable(&declaration.name, bounds, declaration.codec.as_ref())?;

        let default = overrides.default.or(declaration.default);
        if let Some(default) = default {
            bounds
                .check(default)
                .map_err(|source| ConfigError::InvalidDefault {
                    setting: declaration.name.clone(),
                    source,
                })?;
        }

        let templates: Vec<&str> = declaration.formats.iter().map(String::as_str).collect();
        let matcher = FormatMatcher::new(
            &declaration.name,
            declaration.shorthand.as_deref(),
            &templates,
            declaration.codec.literal_pattern(),
        )
        .map_err(|source| ConfigError::InvalidFormat {
            setting: declaration.name.clone(),
            source,
        })?;

        Ok(Self {
            name: declaration.name,
            unit: declaration.unit,
            bounds,
            default,
            matcher,
            codec: declaration.codec,
        })
    }

    /// Setting name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display unit (empty if unitless).
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The configured lattice.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The value decoded when no flag is present.
    #[must_use]
    pub const fn default(&self) -> Option<f64> {
        self.default
    }

    /// The flag formats of this setting.
    #[must_use]
    pub const fn matcher(&self) -> &FormatMatcher {
        &self.matcher
    }

    /// Encodes a number into its flag, in the preferred format.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::InvalidValue`] if the value is not on the
    /// lattice, or [`RuntimeError::Encode`] if the codec cannot spell it.
    pub fn encode_value(&self, value: f64) -> Result<Vec<String>, RuntimeError> {
        self.bounds
            .check(value)
            .map_err(|source| RuntimeError::InvalidValue {
                setting: self.name.clone(),
                source,
            })?;

        let literal = self
            .codec
            .encode(value)
            .map_err(|source| RuntimeError::Encode {
                setting: self.name.clone(),
                value,
                source,
            })?;

        let token = self.matcher.render_preferred(&literal);
        tracing::debug!(setting = %self.name, value, token = %token, "Encoded setting");

        Ok(vec![token])
    }

    /// Decodes the number carried by the token list.
    ///
    /// Every declared format is accepted. Tokens of other settings are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`RuntimeError`] if:
    /// - no token matches and no default is configured
    /// - more than one token matches
    /// - the literal is malformed or decodes to a value off the lattice
    pub fn decode_value<S: AsRef<str>>(&self, tokens: &[S]) -> Result<f64, RuntimeError> {
        match self.matcher.scan(tokens).as_slice() {
            [] => {
                tracing::debug!(setting = %self.name, default = ?self.default, "No flag found");
                self.default.ok_or_else(|| RuntimeError::NoValueFound {
                    setting: self.name.clone(),
                })
            }
            [found] => {
                let value = self
                    .codec
                    .decode(found.literal)
                    .map_err(|source| RuntimeError::InvalidLiteral {
                        setting: self.name.clone(),
                        token: found.token.to_string(),
                        source,
                    })?;

                self.bounds
                    .check(value)
                    .map_err(|source| RuntimeError::InvalidDecodedValue {
                        setting: self.name.clone(),
                        token: found.token.to_string(),
                        source,
                    })?;

                tracing::debug!(
                    setting = %self.name,
                    value,
                    token = found.token,
                    "Decoded setting"
                );
                Ok(value)
            }
            many => Err(RuntimeError::AmbiguousValue {
                setting: self.name.clone(),
                tokens: many.iter().map(|m| m.token.to_string()).collect(),
            }),
        }
    }
}

impl SettingCodec for RangeSetting {
    fn name(&self) -> &str {
        &self.name
    }

    fn encode_option(&self, value: Option<&SettingValue>) -> Result<Vec<String>, RuntimeError> {
        match value {
            None => self
                .default
                .ok_or_else(|| RuntimeError::MissingValue {
                    setting: self.name.clone(),
                })
                .and_then(|default| self.encode_value(default)),
            Some(SettingValue::Number(n)) => self.encode_value(*n),
            Some(other) => Err(RuntimeError::WrongValueType {
                setting: self.name.clone(),
                expected: "number",
                value: other.clone(),
            }),
        }
    }

    fn decode_option<S: AsRef<str>>(&self, tokens: &[S]) -> Result<SettingValue, RuntimeError> {
        self.decode_value(tokens).map(SettingValue::Number)
    }

    fn describe<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Descriptor, RuntimeError> {
        let value = self.decode_value(tokens)?;
        Ok(Descriptor::Range {
            min: self.bounds.min().into(),
            max: self.bounds.max().into(),
            step: self.bounds.step().into(),
            value: value.into(),
            unit: self.unit.clone(),
        })
    }
}

/// Checks that every lattice point survives an encode/decode round trip.
///
/// Points between the codec's resolution steps would be rounded on encode,
/// so `min` and `step` must be multiples of it. The end points are then
/// round-tripped to catch values outside the codec's domain.
fn check_representable(
    setting: &str,
    bounds: Bounds,
    codec: &dyn ValueCodec,
) -> Result<(), ConfigError> {
    let resolution = codec.resolution();
    if !bounds.is_aligned_to(resolution) {
        return Err(ConfigError::UnrepresentableBounds {
            setting: setting.to_string(),
            reason: format!("min and step of {bounds} must be multiples of {resolution}"),
        });
    }

    for point in [bounds.min(), bounds.max()] {
        let reason = match codec.encode(point).and_then(|literal| codec.decode(&literal)) {
            Ok(decoded) if bounds.same_point(decoded, point) => continue,
            Ok(decoded) => format!("{point} reads back as {decoded}"),
            Err(source) => format!("{point} has no literal form: {source}"),
        };
        return Err(ConfigError::UnrepresentableBounds {
            setting: setting.to_string(),
            reason,
        });
    }

    Ok(())
}
