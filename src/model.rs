use std::fmt;

use serde::Deserialize;
use serde_json::value::RawValue;

/// What a raw JSON token holds, judged from its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(raw: &RawValue) -> Self {
        match raw.get().trim_start().as_bytes().first() {
            Some(b'{') => Self::Object,
            Some(b'[') => Self::Array,
            Some(b'"') => Self::String,
            Some(b't' | b'f') => Self::Bool,
            Some(b'n') => Self::Null,
            _ => Self::Number,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        })
    }
}

/// A value copied verbatim into the generated source.
///
/// Strings contribute their decoded contents without quotes, numbers and
/// booleans the exact text found in the file. Nothing is parsed, rounded or
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Box<RawValue>")]
pub struct Literal(String);

impl Literal {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Box<RawValue>> for Literal {
    type Error = String;

    fn try_from(raw: Box<RawValue>) -> Result<Self, Self::Error> {
        let text = raw.get().trim();
        match JsonKind::of(&raw) {
            JsonKind::String => serde_json::from_str(text)
                .map(Self)
                .map_err(|e| e.to_string()),
            JsonKind::Number | JsonKind::Bool => Ok(Self(text.to_owned())),
            other => Err(format!("expected a string or number, found {other}")),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// One vesting record, 1-to-1 with a JSON object in the input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub address: Literal,
    pub allocation_at_start_date: Literal,
    pub allocation_at_end_date: Literal,
    pub start_date: Literal,
    pub end_date: Literal,
}

/// A named group of entries ("team", "investors", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<AllocationEntry>,
}

impl Category {
    pub fn new(name: impl Into<String>, entries: Vec<AllocationEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

/// Entire dataset as it comes out of the loader.
///
/// Categories are kept in file order; output order depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationDataset {
    pub categories: Vec<Category>,
}

impl AllocationDataset {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Number of entries across every category.
    pub fn total_allocations(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

/// Rendered contract source handed to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    source: String,
    allocations: usize,
}

impl GeneratedArtifact {
    pub(crate) fn new(source: String, allocations: usize) -> Self {
        Self {
            source,
            allocations,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Size of the declared `allAllocations` array.
    pub fn allocations(&self) -> usize {
        self.allocations
    }
}
