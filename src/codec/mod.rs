//! Value codecs for flag literals.
//!
//! This module provides:
//! - The [`ValueCodec`] trait converting semantic values to flag literals and back
//! - Memory sizes with a unit suffix ([`MemoryCodec`], [`MemoryUnit`])
//! - Plain decimal integers ([`IntegerCodec`])
//! - Boolean sign tokens ([`SignCodec`])
//!
//! Every codec obeys the round-trip law: for any value `v` it accepts,
//! `decode(encode(v)) == v`.

mod error;
mod units;
mod value;

#[cfg(test)]
mod value_tests;

pub use error::CodecError;
pub use units::MemoryUnit;
pub use value::{IntegerCodec, MemoryCodec, SignCodec, ValueCodec};
