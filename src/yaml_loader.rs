//! YAML schema document loader.
//!
//! This module handles loading schema documents back from YAML files and
//! checking them for duplicate schema names, field names, and field ids.

use crate::schema::{Document, Schema};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load a schema document from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the YAML document
///
/// # Returns
///
/// The parsed and validated document
///
/// # Example
///
/// ```ignore
/// use hql2yaml::yaml_loader::load_document;
///
/// let document = load_document("result.yaml").unwrap();
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document, String> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read schema file {}: {}", path.display(), e))?;

    let document: Document = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse YAML: {}", e))?;

    validate_document(&document)?;

    Ok(document)
}

/// Validate a schema document.
///
/// Checks for:
/// - Duplicate schema names across the document
/// - Duplicate field names within a schema
/// - Duplicate field ids within a schema
pub fn validate_document(document: &Document) -> Result<(), String> {
    let mut schema_names = HashSet::new();

    for schema in &document.schemas {
        if !schema_names.insert(schema.name.as_str()) {
            return Err(format!("Duplicate schema name: {}", schema.name));
        }
        validate_fields(schema)?;
    }

    Ok(())
}

/// Validate field uniqueness within a schema
fn validate_fields(schema: &Schema) -> Result<(), String> {
    let mut field_names = HashSet::new();
    let mut field_ids = HashSet::new();

    for field in &schema.fields {
        if !field_names.insert(field.name.as_str()) {
            return Err(format!(
                "Duplicate field name '{}' in schema '{}'",
                field.name, schema.name
            ));
        }
        if !field_ids.insert(field.id) {
            return Err(format!(
                "Duplicate field id {} in schema '{}'",
                field.id, schema.name
            ));
        }
    }

    Ok(())
}
