//! Memory unit suffix table.
//!
//! The JVM spells memory sizes as an integer followed by a single-letter
//! binary suffix (`k`, `m`, `g`, `t`, in either case). Decoding also reads
//! `p` and `e`, and the explicit IEC spellings (`Ki` .. `Ei`).

use std::fmt;

use super::CodecError;

/// A binary memory unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryUnit {
    /// 2^10 bytes.
    Kibi,
    /// 2^20 bytes.
    Mebi,
    /// 2^30 bytes.
    Gibi,
    /// 2^40 bytes.
    Tebi,
    /// 2^50 bytes.
    Pebi,
    /// 2^60 bytes.
    Exbi,
}

/// Recognized literal suffixes, longest first.
const SUFFIXES: &[(&str, MemoryUnit)] = &[
    ("Ei", MemoryUnit::Exbi),
    ("Pi", MemoryUnit::Pebi),
    ("Ti", MemoryUnit::Tebi),
    ("Gi", MemoryUnit::Gibi),
    ("Mi", MemoryUnit::Mebi),
    ("Ki", MemoryUnit::Kibi),
    ("e", MemoryUnit::Exbi),
    ("E", MemoryUnit::Exbi),
    ("p", MemoryUnit::Pebi),
    ("P", MemoryUnit::Pebi),
    ("t", MemoryUnit::Tebi),
    ("T", MemoryUnit::Tebi),
    ("g", MemoryUnit::Gibi),
    ("G", MemoryUnit::Gibi),
    ("m", MemoryUnit::Mebi),
    ("M", MemoryUnit::Mebi),
    ("k", MemoryUnit::Kibi),
    ("K", MemoryUnit::Kibi),
];

impl MemoryUnit {
    /// Number of bytes in one unit.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::Kibi => 1 << 10,
            Self::Mebi => 1 << 20,
            Self::Gibi => 1 << 30,
            Self::Tebi => 1 << 40,
            Self::Pebi => 1 << 50,
            Self::Exbi => 1 << 60,
        }
    }

    /// The lowercase single-letter suffix the JVM uses for this unit.
    ///
    /// Units above tebibytes are read but never written.
    #[must_use]
    pub const fn jvm_suffix(self) -> Option<char> {
        match self {
            Self::Kibi => Some('k'),
            Self::Mebi => Some('m'),
            Self::Gibi => Some('g'),
            Self::Tebi => Some('t'),
            Self::Pebi | Self::Exbi => None,
        }
    }

    /// The IEC symbol of this unit (`KiB`, `MiB`, ...).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kibi => "KiB",
            Self::Mebi => "MiB",
            Self::Gibi => "GiB",
            Self::Tebi => "TiB",
            Self::Pebi => "PiB",
            Self::Exbi => "EiB",
        }
    }

    /// How many `other` units fit in one `self` unit.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // powers of two are exact in f64
    pub fn ratio_to(self, other: Self) -> f64 {
        self.bytes() as f64 / other.bytes() as f64
    }

    /// Splits a literal such as `4096m` into its magnitude and unit.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownSuffix`] if the literal does not end
    /// with a recognized suffix.
    pub fn split_literal(literal: &str) -> Result<(&str, Self), CodecError> {
        SUFFIXES
            .iter()
            .find_map(|(suffix, unit)| {
                literal
                    .strip_suffix(suffix)
                    .map(|magnitude| (magnitude, *unit))
            })
            .ok_or_else(|| CodecError::UnknownSuffix {
                literal: literal.to_string(),
            })
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
