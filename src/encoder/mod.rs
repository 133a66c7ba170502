//! Encoding and decoding of whole JVM option sets.
//!
//! This module provides:
//! - The catalog of supported settings ([`catalog`])
//! - The multi-setting orchestrator ([`Encoder`], [`EncoderConfig`])
//! - Output shapes ([`OutputMode`], [`Encoded`])
//!
//! # Token Order
//!
//! Encoding emits the configured `before` tokens, then each setting's
//! tokens in declaration order, then the `after` tokens.

pub mod catalog;
mod engine;
mod output;

#[cfg(test)]
mod catalog_tests;
#[cfg(test)]
mod output_tests;

pub use engine::{Encoder, EncoderConfig, SettingRequest};
pub use output::{Encoded, OutputMode, split_joined};
