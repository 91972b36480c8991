//! Core types shared by the scraper and the CSV writer.

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::error::Error;

/// Value used for `translatable` when an element does not carry the attribute.
pub const DEFAULT_TRANSLATABLE: &str = "true";

/// A top-level resource element kind found under `<resources>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `<string name="...">text</string>`
    String,
    /// `<string-array name="...">` with `<item>` children.
    StringArray,
    /// `<plurals name="...">` with `<item quantity="...">` children.
    Plurals,
}

impl ResourceKind {
    /// The element tag this kind is parsed from.
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::String => "string",
            ResourceKind::StringArray => "string-array",
            ResourceKind::Plurals => "plurals",
        }
    }

    /// Whether this resource holds its text in `<item>` children.
    pub fn is_container(&self) -> bool {
        matches!(self, ResourceKind::StringArray | ResourceKind::Plurals)
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ResourceKind::String),
            "string-array" => Ok(ResourceKind::StringArray),
            "plurals" => Ok(ResourceKind::Plurals),
            other => Err(Error::UnsupportedTag(other.to_string())),
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// The `Tag` column of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowTag {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string-array")]
    StringArray,
    #[serde(rename = "plurals")]
    Plurals,
    #[serde(rename = "item")]
    Item,
}

impl RowTag {
    /// The literal written to the `Tag` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowTag::String => "string",
            RowTag::StringArray => "string-array",
            RowTag::Plurals => "plurals",
            RowTag::Item => "item",
        }
    }
}

impl From<ResourceKind> for RowTag {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::String => RowTag::String,
            ResourceKind::StringArray => RowTag::StringArray,
            ResourceKind::Plurals => RowTag::Plurals,
        }
    }
}

impl Display for RowTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flattened output record, written as one CSV line.
///
/// `item` rows carry the `name` and `translatable` of their enclosing
/// `string-array` or `plurals`. Container rows have an empty `text`; their
/// text lives in the item rows that follow them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(rename = "Tag")]
    pub tag: RowTag,

    #[serde(rename = "Id")]
    pub name: String,

    /// Kept as the literal attribute value; `"true"` when absent.
    #[serde(rename = "Translatable")]
    pub translatable: String,

    #[serde(rename = "Text")]
    pub text: String,

    /// Only set on `item` rows under `plurals`.
    #[serde(rename = "Quantity")]
    pub quantity: String,
}
