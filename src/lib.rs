//! # hql2yaml: Hive Schema Dump to YAML Converter
//!
//! hql2yaml converts a line-oriented Hive schema dump (one column
//! declaration per line) into a YAML schema document listing field names,
//! types, and 1-based positional ids under a named schema.
//!
//! ## Features
//!
//! - **Line parser**: extracts `(name, type)` pairs from whitespace-heavy
//!   dump lines, skipping comments and non-declaration lines
//! - **Schema document model**: plain immutable `Field`/`Schema`/`Document`
//!   value types with serde support
//! - **YAML serialization**: block-style output with alphabetically ordered
//!   mapping keys
//! - **Loader with validation**: reads documents back and rejects duplicate
//!   schema names, field names, and field ids
//!
//! ## Example
//!
//! Input dump:
//!
//! ```text
//! id int from_deserializer
//! # col_name data_type comment
//! name string from_deserializer
//! ```
//!
//! Output document:
//!
//! ```yaml
//! schemas:
//! - fields:
//!   - id: 1
//!     name: id
//!     type: from_deserializer
//!   - id: 2
//!     name: name
//!     type: from_deserializer
//!   name: users
//! ```

// Core modules
pub mod convert;
pub mod parser;
pub mod schema;
pub mod serialization;
pub mod yaml_loader;

// Re-export key types
pub use convert::{convert_file, convert_to_file};
pub use parser::{parse_declaration, parse_fields, Declaration};
pub use schema::{Document, Field, Schema};
pub use serialization::{to_yaml_string, write_yaml, write_yaml_file, SerializationError};
pub use yaml_loader::{load_document, validate_document};
