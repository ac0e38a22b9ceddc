//! Header block parsing
//!
//! A post starts with a block delimited by `---` lines holding `key: value`
//! pairs. A key with no value opens a nested record that collects the
//! following two-space-indented lines.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref HEADER_BLOCK: Regex = Regex::new(r"---\s*([\s\S]*?)\s*---").unwrap();
    static ref QUOTED: Regex =
        Regex::new(r#"^['"]([^\n\r\x{2028}\x{2029}]*)['"]$"#).unwrap();
}

/// Errors raised while splitting a document
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing header block: expected content between two `---` lines")]
    MissingHeaderBlock,

    #[error("field {0:?} cannot be written as a header line")]
    UnwritableField(String),
}

/// A single metadata value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Plain string value (`title: Hello`)
    Scalar(String),
    /// One level of indented `key: value` lines under a bare `key:`
    Nested(IndexMap<String, String>),
}

impl MetaValue {
    /// The value as a string, if it is a scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Scalar(s) => Some(s),
            MetaValue::Nested(_) => None,
        }
    }

    /// The value as a nested record, if it is one
    pub fn as_nested(&self) -> Option<&IndexMap<String, String>> {
        match self {
            MetaValue::Scalar(_) => None,
            MetaValue::Nested(map) => Some(map),
        }
    }
}

/// Post author, taken from the nested `author` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub bio: String,
    #[serde(rename = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Ordered metadata record of a post
///
/// Fields keep the order in which they first appeared in the header. Unknown
/// fields are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: IndexMap<String, MetaValue>,
}

/// Line-classification state while walking the header
enum HeaderState {
    Closed,
    Open {
        field: String,
        fields: IndexMap<String, String>,
    },
}

impl HeaderState {
    /// Name of the open field that may absorb indented lines.
    ///
    /// A field opened with an empty name (blank or separator-less line that
    /// trims to nothing) never absorbs anything.
    fn absorbing_field(&self) -> Option<&str> {
        match self {
            HeaderState::Open { field, .. } if !field.is_empty() => Some(field),
            _ => None,
        }
    }
}

impl Metadata {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a document into its metadata record and trimmed body
    pub fn parse(content: &str) -> Result<(Self, String), ParseError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let captures = HEADER_BLOCK
            .captures(content)
            .ok_or(ParseError::MissingHeaderBlock)?;
        let whole = captures.get(0).ok_or(ParseError::MissingHeaderBlock)?;
        let block = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

        let mut body = String::with_capacity(content.len() - whole.len());
        body.push_str(&content[..whole.start()]);
        body.push_str(&content[whole.end()..]);

        Ok((Self::parse_block(block), trim(&body).to_string()))
    }

    /// Parse the inner text of a header block (without the `---` lines)
    pub fn parse_block(block: &str) -> Self {
        let mut metadata = Metadata::new();
        let mut state = HeaderState::Closed;

        for line in trim(block).split('\n') {
            let nested_field = if line.starts_with("  ") {
                state.absorbing_field().map(str::to_string)
            } else {
                None
            };

            if let Some(field) = nested_field {
                let (key, value) = split_pair(trim(line));
                if let HeaderState::Open { fields, .. } = &mut state {
                    fields.insert(trim(key).to_string(), strip_quotes(trim(value)));
                    metadata.insert(field, MetaValue::Nested(fields.clone()));
                }
                continue;
            }

            let (key, value) = split_pair(line);
            let value = trim(value);

            if value.is_empty() {
                let key = trim(key);
                let field = key.strip_suffix(':').unwrap_or(key).to_string();
                state = HeaderState::Open {
                    field,
                    fields: IndexMap::new(),
                };
            } else {
                metadata.insert(trim(key).to_string(), MetaValue::Scalar(strip_quotes(value)));
                state = HeaderState::Closed;
            }
        }

        metadata
    }

    /// Insert or overwrite a field, keeping its original position
    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        self.fields.insert(key.into(), value);
    }

    /// Look up any field
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }

    /// Look up a scalar field
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::as_str)
    }

    /// Iterate over fields in header order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetaValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    pub fn published_at(&self) -> Option<&str> {
        self.get_str("publishedAt")
    }

    pub fn summary(&self) -> Option<&str> {
        self.get_str("summary")
    }

    pub fn image(&self) -> Option<&str> {
        self.get_str("image")
    }

    /// The nested `author` record as an [`Author`]
    ///
    /// Missing `name` or `bio` entries come back as empty strings.
    pub fn author(&self) -> Option<Author> {
        let fields = self.get("author")?.as_nested()?;
        let get = |key: &str| fields.get(key).cloned();
        Some(Author {
            name: get("name").unwrap_or_default(),
            bio: get("bio").unwrap_or_default(),
            avatar_url: get("avatarUrl"),
        })
    }

    /// Write the record back as a `---`-delimited header block
    ///
    /// Values the parser would alter are wrapped in double quotes so that
    /// parsing the output gives back the same record. Fields that no header
    /// line can carry (line breaks, `---`, empty nested records, keys that
    /// would split or trim differently) are rejected.
    pub fn to_header(&self) -> Result<String, ParseError> {
        let mut out = String::from("---\n");
        for (key, value) in &self.fields {
            check_key(key)?;
            match value {
                MetaValue::Scalar(s) => {
                    check_value(key, s)?;
                    out.push_str(&format!("{}: {}\n", key, quote_if_needed(s)));
                }
                MetaValue::Nested(map) => {
                    if map.is_empty() {
                        return Err(ParseError::UnwritableField(key.clone()));
                    }
                    out.push_str(&format!("{}:\n", key));
                    for (k, v) in map {
                        check_key(k)?;
                        check_value(k, v)?;
                        out.push_str(&format!("  {}: {}\n", k, quote_if_needed(v)));
                    }
                }
            }
        }
        out.push_str("---\n");
        Ok(out)
    }
}

/// Trim the way the header format expects, byte order marks included
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Text that would end a header line or the header block early
fn breaks_header(s: &str) -> bool {
    s.contains("---") || s.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}

fn check_key(key: &str) -> Result<(), ParseError> {
    if key.is_empty() || trim(key) != key || key.contains(": ") || breaks_header(key) {
        return Err(ParseError::UnwritableField(key.to_string()));
    }
    Ok(())
}

fn check_value(key: &str, value: &str) -> Result<(), ParseError> {
    if breaks_header(value) {
        return Err(ParseError::UnwritableField(key.to_string()));
    }
    Ok(())
}

/// Split at the first `": "`; a line without one is all key
fn split_pair(line: &str) -> (&str, &str) {
    line.split_once(": ").unwrap_or((line, ""))
}

/// Remove one layer of surrounding quote characters
fn strip_quotes(value: &str) -> String {
    QUOTED.replace(value, "$1").into_owned()
}

fn quote_if_needed(value: &str) -> String {
    if value.is_empty() || trim(value) != value || QUOTED.is_match(value) {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
