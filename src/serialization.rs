//! YAML serialization for schema documents.
//!
//! This module writes [`Document`]s as block-style YAML, to strings, to
//! arbitrary writers, or to files.

use crate::schema::Document;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Error type for serialization operations
#[derive(Debug)]
pub enum SerializationError {
    YamlError(serde_yaml::Error),
    IoError(std::io::Error),
}

impl From<serde_yaml::Error> for SerializationError {
    fn from(err: serde_yaml::Error) -> Self {
        SerializationError::YamlError(err)
    }
}

impl From<std::io::Error> for SerializationError {
    fn from(err: std::io::Error) -> Self {
        SerializationError::IoError(err)
    }
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::YamlError(e) => write!(f, "YAML error: {}", e),
            SerializationError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SerializationError {}

/// Serialize a document to a block-style YAML string.
///
/// Mapping keys come out in the struct declaration order of the model
/// types, which is alphabetical.
pub fn to_yaml_string(document: &Document) -> Result<String, SerializationError> {
    Ok(serde_yaml::to_string(document)?)
}

/// Write a document as YAML to any writer.
pub fn write_yaml<W: Write>(writer: W, document: &Document) -> Result<(), SerializationError> {
    serde_yaml::to_writer(writer, document)?;
    Ok(())
}

/// Write a document as YAML to a file, replacing any existing content.
pub fn write_yaml_file<P: AsRef<Path>>(
    document: &Document,
    path: P,
) -> Result<(), SerializationError> {
    let mut file = File::create(path)?;
    write_yaml(&mut file, document)?;
    file.flush()?;
    Ok(())
}
