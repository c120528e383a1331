//! Versioned section schema.

use derive_getters::Getters;
use procdoc_core::Section;
use procdoc_error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUNDLED_SCHEMA: &str = include_str!("../schemas/pdd_default.toml");

/// One named section and the instruction used to generate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SchemaEntry {
    /// Section name, unique within a schema
    name: String,
    /// Section-specific instruction
    prompt: String,
}

impl SchemaEntry {
    /// Create a schema entry.
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
        }
    }
}

/// Ordered list of sections every document is built from.
///
/// # Examples
///
/// ```
/// use procdoc_pipeline::SectionSchema;
///
/// let schema = SectionSchema::bundled().unwrap();
/// assert_eq!(schema.sections()[0].name(), "Process Name");
/// assert_eq!(*schema.process_steps_position(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SectionSchema {
    /// Schema format version
    version: u32,
    /// 1-based position of the section the flow diagram is derived from
    process_steps_position: usize,
    /// Sections in generation and rendering order
    sections: Vec<SchemaEntry>,
}

impl SectionSchema {
    /// Build and validate a schema.
    ///
    /// # Errors
    ///
    /// Returns a schema error if validation fails.
    pub fn new(
        version: u32,
        process_steps_position: usize,
        sections: Vec<SchemaEntry>,
    ) -> Result<Self, SchemaError> {
        let schema = Self {
            version,
            process_steps_position,
            sections,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// The schema shipped with procdoc.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the bundled file is invalid.
    pub fn bundled() -> Result<Self, SchemaError> {
        Self::from_toml_str(BUNDLED_SCHEMA)
    }

    /// Parse and validate a schema from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a schema error if parsing or validation fails.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        let schema: Self = toml::from_str(source)
            .map_err(|e| SchemaError::new(format!("Failed to parse schema: {}", e)))?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load a schema file.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the file cannot be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            SchemaError::new(format!("Failed to read schema {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    /// The bundled schema, or the file at `path` when given.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the selected schema is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, SchemaError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::bundled(),
        }
    }

    /// Serialize back to TOML.
    ///
    /// # Errors
    ///
    /// Returns a schema error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, SchemaError> {
        toml::to_string_pretty(self)
            .map_err(|e| SchemaError::new(format!("Failed to serialize schema: {}", e)))
    }

    /// The section the flow diagram is derived from, if the list is long enough.
    pub fn steps_section<'a>(&self, sections: &'a [Section]) -> Option<&'a Section> {
        sections.get(self.process_steps_position.checked_sub(1)?)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.sections.is_empty() {
            return Err(SchemaError::new("schema has no sections"));
        }
        if self.process_steps_position == 0 {
            return Err(SchemaError::new("process_steps_position must be at least 1"));
        }

        let mut seen = HashSet::new();
        for entry in &self.sections {
            if entry.name.trim().is_empty() {
                return Err(SchemaError::new("schema section with empty name"));
            }
            if entry.prompt.trim().is_empty() {
                return Err(SchemaError::new(format!(
                    "schema section '{}' has an empty prompt",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(SchemaError::new(format!(
                    "duplicate section name: {}",
                    entry.name
                )));
            }
        }
        Ok(())
    }
}
