//! Integration tests that generate enum files on disk.

use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use enumsmith_codegen::Generator;
use enumsmith_core::Overwrite;
use enumsmith_manifest::{DefinitionFile, ENUM_DIR, EnumDefinition, ValueEntry};
use tempfile::TempDir;

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

fn definition(name: &str, values: &[&str]) -> EnumDefinition {
    EnumDefinition {
        name: name.to_string(),
        plural: None,
        values: values
            .iter()
            .map(|key| ValueEntry {
                key: key.to_string(),
                value: None,
            })
            .collect(),
    }
}

#[test]
fn test_generates_one_file_per_definition() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join(ENUM_DIR);
    let definitions = vec![
        definition("role", &["admin", "user"]),
        definition("color", &["red", "green"]),
    ];

    let result = Generator::new(&definitions, timestamp())
        .generate(&output_dir, Overwrite::IfMissing);

    assert_eq!(result.written.len(), 2);
    assert!(result.skipped.is_empty());
    assert!(result.failures.is_empty());
    assert_eq!(result.written[0].name, "Role");
    assert_eq!(result.written[0].path, output_dir.join("role.go"));
    assert!(output_dir.join("role.go").is_file());
    assert!(output_dir.join("color.go").is_file());
}

#[test]
fn test_generates_from_definition_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("enums.yaml"),
        "- name: role\n  values:\n    - key: admin\n    - key: user\n",
    )
    .unwrap();

    let file = DefinitionFile::locate(dir.path()).unwrap();
    let definitions = file.load().unwrap();
    let output_dir = dir.path().join(ENUM_DIR);
    let result = Generator::new(&definitions, timestamp())
        .generate(&output_dir, Overwrite::IfMissing);

    assert_eq!(result.written.len(), 1);
    let content = fs::read_to_string(output_dir.join("role.go")).unwrap();
    assert!(content.contains("type Role string"));
    assert!(content.contains("Admin Role = \"ADMIN\""));
    assert!(content.contains("User  Role = \"USER\""));
    assert!(content.contains("var Roles = roles{"));
}

#[test]
fn test_existing_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join(ENUM_DIR);
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("role.go"), "// hand-edited\n").unwrap();
    let definitions = vec![definition("role", &["admin"])];

    let result = Generator::new(&definitions, timestamp())
        .generate(&output_dir, Overwrite::IfMissing);

    assert!(result.written.is_empty());
    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].path, output_dir.join("role.go"));
    assert!(result.failures.is_empty());

    let content = fs::read_to_string(output_dir.join("role.go")).unwrap();
    assert_eq!(content, "// hand-edited\n");
}

#[test]
fn test_overwrite_always_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join(ENUM_DIR);
    fs::create_dir_all(&output_dir).unwrap();
    fs::write(output_dir.join("role.go"), "// hand-edited\n").unwrap();
    let definitions = vec![definition("role", &["admin"])];

    let result = Generator::new(&definitions, timestamp())
        .generate(&output_dir, Overwrite::Always);

    assert_eq!(result.written.len(), 1);
    assert!(result.skipped.is_empty());

    let content = fs::read_to_string(output_dir.join("role.go")).unwrap();
    assert!(content.contains("type Role string"));
}

#[test]
fn test_failed_definition_does_not_block_others() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join(ENUM_DIR);
    let definitions = vec![
        definition("", &["a"]),
        definition("color", &["red"]),
    ];

    let result = Generator::new(&definitions, timestamp())
        .generate(&output_dir, Overwrite::IfMissing);

    assert_eq!(result.written.len(), 1);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].index, 0);
    assert!(output_dir.join("color.go").is_file());
}

#[test]
fn test_output_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join(ENUM_DIR);
    assert!(!output_dir.exists());

    let definitions = vec![definition("role", &["admin"])];
    let result = Generator::new(&definitions, timestamp())
        .generate(&output_dir, Overwrite::IfMissing);

    assert!(result.failures.is_empty());
    assert!(output_dir.is_dir());
}
