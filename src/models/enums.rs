//! Property value types and the fixed hint-coercion tables.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The value type of a graph property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    String,
    Integer,
    Float,
    Boolean,
    List,
    Map,
    Date,
    LocalTime,
    ZonedTime,
    LocalDatetime,
    ZonedDatetime,
    Duration,
    Point,
    ByteArray,
}

/// All members, in declaration order.
pub const ALL_PROPERTY_TYPES: [PropertyType; 14] = [
    PropertyType::String,
    PropertyType::Integer,
    PropertyType::Float,
    PropertyType::Boolean,
    PropertyType::List,
    PropertyType::Map,
    PropertyType::Date,
    PropertyType::LocalTime,
    PropertyType::ZonedTime,
    PropertyType::LocalDatetime,
    PropertyType::ZonedDatetime,
    PropertyType::Duration,
    PropertyType::Point,
    PropertyType::ByteArray,
];

/// Exact spellings accepted for each type, including legacy forms with
/// spaces and no separators. Keys are uppercase.
static EXACT_NAMES: Lazy<HashMap<&'static str, PropertyType>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for t in ALL_PROPERTY_TYPES {
        map.insert(t.as_str(), t);
    }
    map.insert("LOCAL TIME", PropertyType::LocalTime);
    map.insert("LOCALTIME", PropertyType::LocalTime);
    map.insert("ZONED TIME", PropertyType::ZonedTime);
    map.insert("ZONEDTIME", PropertyType::ZonedTime);
    map.insert("LOCAL DATETIME", PropertyType::LocalDatetime);
    map.insert("LOCALDATETIME", PropertyType::LocalDatetime);
    map.insert("ZONED DATETIME", PropertyType::ZonedDatetime);
    map.insert("ZONEDDATETIME", PropertyType::ZonedDatetime);
    map.insert("BYTEARRAY", PropertyType::ByteArray);
    map
});

/// Datatype spellings used by the workbench interchange format.
static WORKBENCH_NAMES: Lazy<HashMap<&'static str, PropertyType>> = Lazy::new(|| {
    ALL_PROPERTY_TYPES
        .iter()
        .map(|t| (t.workbench_type(), *t))
        .collect()
});

impl PropertyType {
    /// The canonical name, as used in schema text and YAML output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "STRING",
            PropertyType::Integer => "INTEGER",
            PropertyType::Float => "FLOAT",
            PropertyType::Boolean => "BOOLEAN",
            PropertyType::List => "LIST",
            PropertyType::Map => "MAP",
            PropertyType::Date => "DATE",
            PropertyType::LocalTime => "LOCAL_TIME",
            PropertyType::ZonedTime => "ZONED_TIME",
            PropertyType::LocalDatetime => "LOCAL_DATETIME",
            PropertyType::ZonedDatetime => "ZONED_DATETIME",
            PropertyType::Duration => "DURATION",
            PropertyType::Point => "POINT",
            PropertyType::ByteArray => "BYTE_ARRAY",
        }
    }

    /// Coerce a free-form type hint (`"str"`, `"int64"`, `"object"`, ...)
    /// into a value type.
    ///
    /// Exact type names are matched first (case-insensitively, with legacy
    /// space-separated spellings accepted), then the fixed alias table.
    /// Anything unmatched returns `None`; callers fail closed.
    pub fn coerce(hint: &str) -> Option<Self> {
        let trimmed = hint.trim();
        if let Some(t) = EXACT_NAMES.get(trimmed.to_uppercase().as_str()) {
            return Some(*t);
        }

        let lower = trimmed.to_lowercase();
        if lower == "object" || lower.starts_with("str") {
            Some(PropertyType::String)
        } else if lower.contains("float") || lower == "double" {
            Some(PropertyType::Float)
        } else if lower.starts_with("int") {
            Some(PropertyType::Integer)
        } else if lower.contains("bool") {
            Some(PropertyType::Boolean)
        } else if lower.starts_with("list") || lower.starts_with("array") {
            Some(PropertyType::List)
        } else if lower == "dict" {
            Some(PropertyType::Map)
        } else if lower == "date" || lower == "datetime" {
            Some(PropertyType::Date)
        } else {
            None
        }
    }

    /// The datatype spelling used by the workbench interchange format.
    pub fn workbench_type(&self) -> &'static str {
        match self {
            PropertyType::String => "String",
            PropertyType::Integer => "Integer",
            PropertyType::Float => "Float",
            PropertyType::Boolean => "Boolean",
            PropertyType::List => "String Array",
            PropertyType::Map => "Map",
            PropertyType::Date => "Date",
            PropertyType::LocalTime => "Local Time",
            PropertyType::ZonedTime => "Time",
            PropertyType::LocalDatetime => "Local Datetime",
            PropertyType::ZonedDatetime => "Datetime",
            PropertyType::Duration => "Duration",
            PropertyType::Point => "Point",
            PropertyType::ByteArray => "Byte Array",
        }
    }

    /// Parse a workbench datatype spelling.
    pub fn from_workbench(datatype: &str) -> Option<Self> {
        WORKBENCH_NAMES.get(datatype).copied()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
