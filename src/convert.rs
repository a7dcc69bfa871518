//! Hive schema dump to YAML document conversion.
//!
//! One-shot pipeline: read the dump, parse its declaration lines, wrap the
//! fields in a named schema, write the document as YAML.

use crate::parser::parse_fields;
use crate::schema::{Document, Schema};
use crate::serialization::write_yaml_file;
use std::fs;
use std::path::Path;

/// Convert a schema dump file into a single-schema document.
///
/// The whole input is read before parsing begins; the file handle is closed
/// once its contents are in memory.
///
/// # Arguments
///
/// * `input` - Path to the schema dump, one column declaration per line
/// * `schema_name` - Name given to the produced schema, copied verbatim
///
/// # Returns
///
/// A document holding exactly one schema
pub fn convert_file<P: AsRef<Path>>(input: P, schema_name: &str) -> Result<Document, String> {
    let input = input.as_ref();

    let contents = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read schema file {}: {}", input.display(), e))?;

    let fields = parse_fields(contents.lines());

    Ok(Document::single(Schema::new(schema_name, fields)))
}

/// Convert a schema dump file and write the document as YAML to `output`.
///
/// Replaces any existing content at `output`. Returns the document so
/// callers can report what was written.
pub fn convert_to_file<P, Q>(input: P, schema_name: &str, output: Q) -> Result<Document, String>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let document = convert_file(input, schema_name)?;

    write_yaml_file(&document, output.as_ref())
        .map_err(|e| format!("Failed to write {}: {}", output.as_ref().display(), e))?;

    Ok(document)
}
