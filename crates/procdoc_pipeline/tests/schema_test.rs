//! Tests for section schema loading and validation.

use procdoc_core::Section;
use procdoc_pipeline::{SchemaEntry, SectionSchema};

#[test]
fn test_bundled_schema_order() {
    let schema = SectionSchema::bundled().expect("bundled schema is valid");
    let names: Vec<&str> = schema.sections().iter().map(|e| e.name().as_str()).collect();

    assert_eq!(names.len(), 11);
    assert_eq!(names[0], "Process Name");
    assert_eq!(names[5], "Detailed Process Steps");
    assert_eq!(names[10], "Key Contacts");
    assert_eq!(*schema.process_steps_position(), 6);
}

#[test]
fn test_duplicate_names_rejected() {
    let result = SectionSchema::new(
        1,
        1,
        vec![
            SchemaEntry::new("Objectives", "List them."),
            SchemaEntry::new("Objectives", "List them again."),
        ],
    );

    let err = result.expect_err("duplicates are invalid");
    assert!(err.to_string().contains("duplicate section name: Objectives"));
}

#[test]
fn test_invalid_schemas_rejected() {
    assert!(SectionSchema::new(1, 1, vec![]).is_err());
    assert!(SectionSchema::new(1, 0, vec![SchemaEntry::new("A", "Do A.")]).is_err());
    assert!(SectionSchema::new(1, 1, vec![SchemaEntry::new("A", "   ")]).is_err());
    assert!(SectionSchema::from_toml_str("version = 1").is_err());
}

#[test]
fn test_schema_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
version = 2
process_steps_position = 2

[[sections]]
name = "Process Name"
prompt = "Name the process."

[[sections]]
name = "Steps"
prompt = "List the steps."
"#,
    )
    .expect("write schema");

    let schema = SectionSchema::load(Some(&path)).expect("loads");
    assert_eq!(*schema.version(), 2);
    assert_eq!(schema.sections()[1].name(), "Steps");

    let reparsed =
        SectionSchema::from_toml_str(&schema.to_toml_string().expect("serializes")).expect("parses");
    assert_eq!(reparsed, schema);
}

#[test]
fn test_steps_section_requires_enough_sections() {
    let schema = SectionSchema::bundled().expect("bundled schema is valid");
    let five: Vec<Section> = (1..=5).map(|i| Section::new(format!("S{i}"), "x")).collect();
    let six: Vec<Section> = (1..=6).map(|i| Section::new(format!("S{i}"), "x")).collect();

    assert!(schema.steps_section(&five).is_none());
    assert_eq!(schema.steps_section(&six).map(|s| s.name().as_str()), Some("S6"));
}
