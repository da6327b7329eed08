//! Definition parsing from YAML and JSON content.

use miette::SourceSpan;

use crate::{EnumDefinition, Result, error::Error};

/// Parse a YAML definition list with the given filename for error reporting.
pub fn parse_yaml(content: &str, filename: &str) -> Result<Vec<EnumDefinition>> {
    serde_yaml::from_str(content).map_err(|e| {
        let span = e
            .location()
            .map(|loc| SourceSpan::from((loc.index(), 0)));
        Error::parse(content, filename, span, e.to_string())
    })
}

/// Parse a JSON definition list with the given filename for error reporting.
pub fn parse_json(content: &str, filename: &str) -> Result<Vec<EnumDefinition>> {
    serde_json::from_str(content).map_err(|e| {
        let span = offset_of(content, e.line(), e.column()).map(|at| SourceSpan::from((at, 0)));
        Error::parse(content, filename, span, e.to_string())
    })
}

/// Byte offset of a 1-based line/column position.
fn offset_of(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, l) in content.lines().enumerate() {
        if i + 1 == line {
            return Some(offset + column.saturating_sub(1).min(l.len()));
        }
        offset += l.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_full_entry() {
        let definitions = parse_yaml(
            "- name: status\n  plural: statuses\n  values:\n    - key: active\n      value: ACTIVE\n",
            "enums.yaml",
        )
        .unwrap();

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "status");
        assert_eq!(definitions[0].plural.as_deref(), Some("statuses"));
        assert_eq!(definitions[0].values[0].key, "active");
        assert_eq!(definitions[0].values[0].value.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn test_parse_yaml_missing_fields_default() {
        // A missing name parses to "" and is rejected later, during
        // normalization, so one bad entry never aborts the batch.
        let definitions = parse_yaml("- values:\n    - key: admin\n", "enums.yaml").unwrap();

        assert_eq!(definitions[0].name, "");
        assert_eq!(definitions[0].plural, None);
    }

    #[test]
    fn test_parse_yaml_rejects_non_sequence() {
        let err = parse_yaml("name: role\n", "enums.yaml").unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_json_full_entry() {
        let definitions = parse_json(
            r#"[{"name": "role", "values": [{"key": "admin", "value": "ADMIN"}]}]"#,
            "enums.json",
        )
        .unwrap();

        assert_eq!(definitions[0].name, "role");
        assert_eq!(definitions[0].values[0].value.as_deref(), Some("ADMIN"));
    }

    #[test]
    fn test_parse_json_reports_location() {
        let content = "[\n  {\"name\": }\n]";
        let err = parse_json(content, "enums.json").unwrap_err();

        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            _ => panic!("expected parse error"),
        }
    }

    #[test]
    fn test_offset_of() {
        let content = "abc\ndef\nghi";
        assert_eq!(offset_of(content, 1, 1), Some(0));
        assert_eq!(offset_of(content, 2, 1), Some(4));
        assert_eq!(offset_of(content, 3, 3), Some(10));
        assert_eq!(offset_of(content, 9, 1), None);
    }
}
