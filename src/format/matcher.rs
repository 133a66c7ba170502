//! Template rendering and token recognition for one setting.

use handlebars::Handlebars;
use regex::Regex;
use serde_json::{Map, Value};

use super::FormatError;

/// Character introducing every flag on the command line.
pub const FLAG_INTRODUCER: char = '-';

/// Stand-in for the value while rendering a template.
///
/// Splitting the rendered text around it yields the literal text on
/// either side of the value.
const VALUE_SENTINEL: &str = "\u{0}value\u{0}";

/// Capture group name holding the literal.
const LITERAL_GROUP: &str = "literal";

/// One compiled template.
#[derive(Debug, Clone)]
struct Format {
    template: String,
    prefix: String,
    suffix: String,
    pattern: Regex,
}

impl Format {
    fn render(&self, literal: &str) -> String {
        format!("{}{literal}{}", self.prefix, self.suffix)
    }
}

/// A token recognized by a [`FormatMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatMatch<'t> {
    /// Index of the matching format in declared order.
    pub format: usize,
    /// The whole token.
    pub token: &'t str,
    /// The literal captured in place of the value placeholder.
    pub literal: &'t str,
}

/// Renders and recognizes the flag spellings of one setting.
///
/// Templates are compiled once, at construction. The first template is the
/// preferred one used for encoding; the others are accepted on decode only.
/// Recognition tries templates in declared order and the first full-token
/// match wins.
///
/// # Examples
///
/// ```
/// use jvm_opts::format::FormatMatcher;
///
/// let matcher = FormatMatcher::new(
///     "MaxHeapSize",
///     Some("mx"),
///     &["XX:{{name}}={{value}}", "X{{shorthand}}{{value}}"],
///     ".*",
/// )
/// .unwrap();
///
/// assert_eq!(matcher.render_preferred("4096m"), "-XX:MaxHeapSize=4096m");
///
/// let found = matcher.match_token("-Xmx2048m").unwrap();
/// assert_eq!(found.format, 1);
/// assert_eq!(found.literal, "2048m");
/// ```
#[derive(Debug, Clone)]
pub struct FormatMatcher {
    name: String,
    formats: Vec<Format>,
}

impl FormatMatcher {
    /// Compiles the templates of a setting.
    ///
    /// `literal_pattern` is the regular expression the value literal must
    /// match (see [`ValueCodec::literal_pattern`](crate::codec::ValueCodec::literal_pattern)).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `templates` is empty
    /// - a template has invalid syntax or references an unknown placeholder
    /// - a template does not reference `{{value}}` exactly once
    /// - the resulting recognition pattern is invalid
    pub fn new(
        name: &str,
        shorthand: Option<&str>,
        templates: &[&str],
        literal_pattern: &str,
    ) -> Result<Self, FormatError> {
        if templates.is_empty() {
            return Err(FormatError::NoFormats);
        }

        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);

        let mut data = Map::new();
        data.insert("name".to_string(), Value::from(name));
        data.insert("value".to_string(), Value::from(VALUE_SENTINEL));
        if let Some(shorthand) = shorthand {
            data.insert("shorthand".to_string(), Value::from(shorthand));
        }
        let data = Value::Object(data);

        let formats = templates
            .iter()
            .map(|template| compile(&hbs, template, &data, literal_pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            formats,
        })
    }

    /// Name of the setting these formats belong to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Always false: a matcher holds at least one format.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Declared templates, preferred first.
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.formats.iter().map(|f| f.template.as_str())
    }

    /// Renders `literal` with the preferred format.
    #[must_use]
    pub fn render_preferred(&self, literal: &str) -> String {
        self.formats[0].render(literal)
    }

    /// Renders `literal` with the format at `index`.
    ///
    /// Returns `None` if no such format is declared.
    #[must_use]
    pub fn render(&self, literal: &str, index: usize) -> Option<String> {
        self.formats.get(index).map(|f| f.render(literal))
    }

    /// Recognizes a single token.
    ///
    /// Returns the first format, in declared order, matching the whole token.
    #[must_use]
    pub fn match_token<'t>(&self, token: &'t str) -> Option<FormatMatch<'t>> {
        self.formats.iter().enumerate().find_map(|(index, format)| {
            let captures = format.pattern.captures(token)?;
            let literal = captures.name(LITERAL_GROUP).map_or("", |m| m.as_str());
            Some(FormatMatch {
                format: index,
                token,
                literal,
            })
        })
    }

    /// Recognizes every token of a list matching any format, in token order.
    pub fn scan<'t, S: AsRef<str>>(&self, tokens: &'t [S]) -> Vec<FormatMatch<'t>> {
        let found: Vec<_> = tokens
            .iter()
            .filter_map(|token| self.match_token(token.as_ref()))
            .collect();

        for m in &found {
            tracing::trace!(
                setting = %self.name,
                token = m.token,
                format = m.format,
                "Flag recognized"
            );
        }

        found
    }
}

fn compile(
    hbs: &Handlebars<'_>,
    template: &str,
    data: &Value,
    literal_pattern: &str,
) -> Result<Format, FormatError> {
    let rendered = hbs
        .render_template(template, data)
        .map_err(|e| FormatError::Render {
            template: template.to_string(),
            reason: e.to_string(),
        })?;

    let count = rendered.matches(VALUE_SENTINEL).count();
    let Some((before, after)) = rendered.split_once(VALUE_SENTINEL).filter(|_| count == 1) else {
        return Err(FormatError::ValuePlaceholder {
            template: template.to_string(),
            count,
        });
    };

    let prefix = format!("{FLAG_INTRODUCER}{before}");
    let suffix = after.to_string();

    let pattern = format!(
        "^{}(?P<{LITERAL_GROUP}>(?:{literal_pattern})){}$",
        regex::escape(&prefix),
        regex::escape(&suffix),
    );
    let pattern = Regex::new(&pattern).map_err(|e| FormatError::Pattern {
        template: template.to_string(),
        source: e,
    })?;

    Ok(Format {
        template: template.to_string(),
        prefix,
        suffix,
        pattern,
    })
}
