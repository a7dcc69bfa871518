//! Schema document model.
//!
//! Plain value types for the YAML schema document: a [`Document`] wraps a
//! list of named [`Schema`]s, each holding its [`Field`] entries in input
//! order. All three are constructed once per conversion and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};

/// A single field (column) in a schema.
///
/// Struct members are declared in alphabetical key order so the serialized
/// mapping keys come out sorted, matching the emitter's key ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// 1-based position of the field within its schema.
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl Field {
    /// Create a field with the given id, name, and type.
    pub fn new(id: u32, name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// A named collection of fields produced from one schema dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
    pub name: String,
}

impl Schema {
    /// Create a schema from a name and an already-ordered field list.
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            fields,
            name: name.into(),
        }
    }
}

/// Top-level output wrapper holding the list of schemas.
///
/// The converter always emits exactly one schema per run; the wrapping list
/// leaves room for documents that carry several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub schemas: Vec<Schema>,
}

impl Document {
    /// Wrap a single schema into a document.
    pub fn single(schema: Schema) -> Self {
        Self {
            schemas: vec![schema],
        }
    }

    /// Total number of fields across all schemas.
    pub fn field_count(&self) -> usize {
        self.schemas.iter().map(|s| s.fields.len()).sum()
    }

    /// Convert the document to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert the document to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
