//! The value lattice shared by every setting.
//!
//! Legal values are `min + k * step` for integer `k >= 0`, up to `max`.

use std::fmt;

use thiserror::Error;

/// Relative tolerance when deciding whether a value lies on the lattice.
const TOLERANCE: f64 = 1e-9;

/// Why a set of bounds is not a lattice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidBounds {
    /// A bound is NaN or infinite.
    #[error("bounds must be finite numbers")]
    NotFinite,

    /// The step is zero or negative.
    #[error("step must be greater than 0, got {step}")]
    NonPositiveStep {
        /// Configured step
        step: f64,
    },

    /// `min` is greater than `max`.
    #[error("min ({min}) must not be greater than max ({max})")]
    Inverted {
        /// Configured min
        min: f64,
        /// Configured max
        max: f64,
    },

    /// `max - min` is not a multiple of `step`.
    #[error("max ({max}) - min ({min}) is not a multiple of step ({step})")]
    Misaligned {
        /// Configured min
        min: f64,
        /// Configured max
        max: f64,
        /// Configured step
        step: f64,
    },
}

/// Why a value is not on the lattice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeViolation {
    /// The value is NaN or infinite.
    #[error("value must be a finite number")]
    NotFinite,

    /// The value lies outside `[min, max]`.
    #[error("{value} is outside [{min}, {max}]")]
    OutOfRange {
        /// The rejected value
        value: f64,
        /// Lattice min
        min: f64,
        /// Lattice max
        max: f64,
    },

    /// The value falls between two lattice points.
    #[error("{value} is not {min} plus a multiple of {step}")]
    OffLattice {
        /// The rejected value
        value: f64,
        /// Lattice min
        min: f64,
        /// Lattice step
        step: f64,
    },
}

/// How far configuration may move a setting's declared bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Relaxability {
    /// Configured bounds replace the declared ones.
    #[default]
    Relaxable,
    /// Configured bounds must stay within the declared lattice.
    Strict,
    /// Bounds cannot be configured at all.
    Frozen,
}

/// A validated, non-empty value lattice.
///
/// # Examples
///
/// ```
/// use jvm_opts::setting::Bounds;
///
/// let bounds = Bounds::new(1.0, 6.0, 1.0).unwrap();
/// assert!(bounds.check(4.0).is_ok());
/// assert!(bounds.check(2.5).is_err());
/// assert!(bounds.check(7.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
    step: f64,
}

impl Bounds {
    /// The `{0, 1}` lattice of boolean flags.
    pub const BOOLEAN: Self = Self {
        min: 0.0,
        max: 1.0,
        step: 1.0,
    };

    /// Creates a lattice from its bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if any bound is not finite, `step <= 0`,
    /// `min > max`, or `max - min` is not a multiple of `step`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, InvalidBounds> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(InvalidBounds::NotFinite);
        }
        if step <= 0.0 {
            return Err(InvalidBounds::NonPositiveStep { step });
        }
        if min > max {
            return Err(InvalidBounds::Inverted { min, max });
        }
        if !is_whole((max - min) / step) {
            return Err(InvalidBounds::Misaligned { min, max, step });
        }

        Ok(Self { min, max, step })
    }

    /// Lowest legal value.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Highest legal value.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Distance between adjacent legal values.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Checks that `value` is one of the lattice points.
    ///
    /// # Errors
    ///
    /// Returns the [`LatticeViolation`] describing why it is not.
    pub fn check(&self, value: f64) -> Result<(), LatticeViolation> {
        if !value.is_finite() {
            return Err(LatticeViolation::NotFinite);
        }

        let slack = TOLERANCE * self.step;
        if value < self.min - slack || value > self.max + slack {
            return Err(LatticeViolation::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }

        if !is_whole((value - self.min) / self.step) {
            return Err(LatticeViolation::OffLattice {
                value,
                min: self.min,
                step: self.step,
            });
        }

        Ok(())
    }

    /// Returns true if `value` is one of the lattice points.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.check(value).is_ok()
    }

    /// Returns true if every lattice point is a whole multiple of `resolution`.
    #[must_use]
    pub fn is_aligned_to(&self, resolution: f64) -> bool {
        resolution > 0.0 && is_whole(self.min / resolution) && is_whole(self.step / resolution)
    }

    /// Returns true if `a` and `b` denote the same lattice point.
    #[must_use]
    pub fn same_point(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * self.step
    }

    /// Returns true if every point of `other` is also a point of `self`.
    #[must_use]
    pub fn contains_lattice(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max) && is_whole(other.step / self.step)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] step {}", self.min, self.max, self.step)
    }
}

fn is_whole(ratio: f64) -> bool {
    (ratio - ratio.round()).abs() <= TOLERANCE * ratio.abs().max(1.0)
}
