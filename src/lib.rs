//! JVM options: a bidirectional codec between validated JVM tuning values
//! and `-XX` command-line flags.
//!
//! Each setting knows its legal values (a lattice), how to spell a value as
//! a flag literal, and every format the flag may be written in. Encoding
//! validates values and renders flags in the preferred format; decoding
//! recognizes flags in any declared format and recovers the values.

pub mod codec;
pub mod config;
pub mod encoder;
mod error;
pub mod format;
pub mod setting;

pub use encoder::{Encoded, Encoder, EncoderConfig, OutputMode, SettingRequest};
pub use error::Error;
pub use setting::{Descriptor, SettingValue};
