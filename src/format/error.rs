//! Error types for flag template compilation.

use thiserror::Error;

/// Error raised while compiling flag templates.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No template was declared.
    #[error("At least one flag format is required")]
    NoFormats,

    /// The template could not be rendered (syntax error or unknown placeholder).
    #[error("Invalid flag template '{template}': {reason}")]
    Render {
        /// The offending template
        template: String,
        /// Handlebars error message
        reason: String,
    },

    /// The template does not reference the value placeholder exactly once.
    #[error("Flag template '{template}' must contain {{{{value}}}} exactly once, found {count}")]
    ValuePlaceholder {
        /// The offending template
        template: String,
        /// Number of value placeholders found
        count: usize,
    },

    /// The recognition pattern built from the template is invalid.
    #[error("Invalid recognition pattern for template '{template}': {source}")]
    Pattern {
        /// The offending template
        template: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}
