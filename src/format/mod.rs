//! Flag templates: rendering and recognition.
//!
//! This module provides:
//! - Template compilation and rendering ([`FormatMatcher`])
//! - Token recognition results ([`FormatMatch`])
//! - Template errors ([`FormatError`])
//!
//! # Templates
//!
//! A template is a Handlebars string describing one accepted spelling of a
//! flag, without the leading `-`. It may reference `{{name}}` and
//! `{{shorthand}}`, and must reference `{{value}}` exactly once:
//!
//! - `XX:{{name}}={{value}}` spells `-XX:MaxHeapSize=4096m`
//! - `X{{shorthand}}{{value}}` spells `-Xmx4096m`
//! - `XX:{{value}}{{name}}` spells `-XX:+AlwaysPreTouch`

mod error;
mod matcher;


pub use error::FormatError;
pub use matcher::{FLAG_INTRODUCER, FormatMatch, FormatMatcher};
