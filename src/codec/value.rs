//! Value codec trait and its implementations.

use std::fmt;

use super::{CodecError, MemoryUnit};

/// Converts a semantic value into a flag literal and back.
///
/// Implementations must be symmetric: for every value `v` that
/// [`encode`](ValueCodec::encode) accepts, `decode(encode(v))` yields `v`.
///
/// # Thread Safety
///
/// Codecs are shared by immutable settings and must be `Send + Sync`.
pub trait ValueCodec: fmt::Debug + Send + Sync {
    /// Renders a value as the literal placed inside a flag.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unrepresentable`] if the value has no literal form.
    fn encode(&self, value: f64) -> Result<String, CodecError>;

    /// Parses a literal extracted from a flag.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] describing why the literal is malformed.
    fn decode(&self, literal: &str) -> Result<f64, CodecError>;

    /// Smallest difference between two values a literal can express.
    ///
    /// Every encodable value is a whole multiple of it.
    fn resolution(&self) -> f64;

    /// Regular expression every literal of this codec must match.
    ///
    /// Used as the capture group when recognizing flags. The default
    /// accepts anything, so malformed literals surface as decode errors
    /// instead of being silently skipped.
    fn literal_pattern(&self) -> &'static str {
        ".*"
    }
}

/// Memory sizes expressed in a large unit, spelled in a smaller one.
///
/// The semantic value is a (possibly fractional) number of `unit`s,
/// the literal an integer number of `literal_unit`s with the JVM suffix.
///
/// # Examples
///
/// ```
/// use jvm_opts::codec::{MemoryCodec, ValueCodec};
///
/// let codec = MemoryCodec::gib_as_mib();
/// assert_eq!(codec.encode(1.625).unwrap(), "1664m");
/// assert!((codec.decode("2g").unwrap() - 2.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCodec {
    unit: MemoryUnit,
    literal_unit: MemoryUnit,
}

impl MemoryCodec {
    /// Creates a codec for values in `unit`, written in `literal_unit`.
    ///
    /// `literal_unit` must have a JVM suffix (kibi to tebi); otherwise
    /// every encode fails.
    #[must_use]
    pub const fn new(unit: MemoryUnit, literal_unit: MemoryUnit) -> Self {
        Self { unit, literal_unit }
    }

    /// Gibibyte values written as mebibytes (`4` becomes `4096m`).
    #[must_use]
    pub const fn gib_as_mib() -> Self {
        Self::new(MemoryUnit::Gibi, MemoryUnit::Mebi)
    }

    /// The semantic unit of this codec.
    #[must_use]
    pub const fn unit(&self) -> MemoryUnit {
        self.unit
    }
}

impl ValueCodec for MemoryCodec {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )] // checked before casting
    fn encode(&self, value: f64) -> Result<String, CodecError> {
        let Some(suffix) = self.literal_unit.jvm_suffix() else {
            return Err(CodecError::Unrepresentable {
                value,
                reason: "literal unit has no JVM suffix",
            });
        };

        let amount = (value * self.unit.ratio_to(self.literal_unit)).round();
        if !amount.is_finite() || amount < 0.0 || amount > u64::MAX as f64 {
            return Err(CodecError::Unrepresentable {
                value,
                reason: "memory size must be a non-negative finite amount",
            });
        }

        Ok(format!("{}{suffix}", amount as u64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn decode(&self, literal: &str) -> Result<f64, CodecError> {
        let (magnitude, unit) = MemoryUnit::split_literal(literal)?;
        let amount = magnitude
            .parse::<u64>()
            .map_err(|_| CodecError::NotAnInteger {
                literal: literal.to_string(),
            })?;

        Ok(amount as f64 * unit.ratio_to(self.unit))
    }

    fn resolution(&self) -> f64 {
        self.literal_unit.ratio_to(self.unit)
    }
}

/// Integers written as plain decimal strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerCodec;

impl ValueCodec for IntegerCodec {
    #[allow(clippy::cast_possible_truncation)] // checked before casting
    fn encode(&self, value: f64) -> Result<String, CodecError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(CodecError::Unrepresentable {
                value,
                reason: "not an integer",
            });
        }
        if value.abs() > 2f64.powi(53) {
            return Err(CodecError::Unrepresentable {
                value,
                reason: "integer too large to encode exactly",
            });
        }

        Ok((value as i64).to_string())
    }

    #[allow(clippy::cast_precision_loss)]
    fn decode(&self, literal: &str) -> Result<f64, CodecError> {
        literal
            .parse::<i64>()
            .map(|n| n as f64)
            .map_err(|_| CodecError::NotAnInteger {
                literal: literal.to_string(),
            })
    }

    fn resolution(&self) -> f64 {
        1.0
    }
}

/// Booleans written as a sign: `+` for on, `-` for off.
///
/// A missing sign means "on", so both `-XX:+Flag` and `-XX:Flag` enable a flag.
/// Any other literal is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignCodec;

impl SignCodec {
    /// Literal for an enabled flag.
    pub const ON: &'static str = "+";

    /// Literal for a disabled flag.
    pub const OFF: &'static str = "-";
}

impl ValueCodec for SignCodec {
    fn encode(&self, value: f64) -> Result<String, CodecError> {
        if (value - 1.0).abs() < f64::EPSILON {
            Ok(Self::ON.to_string())
        } else if value.abs() < f64::EPSILON {
            Ok(Self::OFF.to_string())
        } else {
            Err(CodecError::Unrepresentable {
                value,
                reason: "booleans are 0 or 1",
            })
        }
    }

    fn decode(&self, literal: &str) -> Result<f64, CodecError> {
        match literal {
            "" | Self::ON => Ok(1.0),
            Self::OFF => Ok(0.0),
            other => Err(CodecError::InvalidSign {
                literal: other.to_string(),
            }),
        }
    }

    fn resolution(&self) -> f64 {
        1.0
    }

    fn literal_pattern(&self) -> &'static str {
        "[+-]?"
    }
}
