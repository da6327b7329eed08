//! Locating and loading the enum definition file.

use std::path::{Path, PathBuf};

use crate::{EnumDefinition, Error, Result, parse};

/// Definition file name in YAML format.
pub const YAML_FILE: &str = "enums.yaml";

/// Definition file name in JSON format.
pub const JSON_FILE: &str = "enums.json";

/// Fallback search directory, also where generated files land.
pub const ENUM_DIR: &str = "enum";

/// Input format of a located definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

/// A located enums.yaml / enums.json file.
#[derive(Debug, Clone)]
pub struct DefinitionFile {
    path: PathBuf,
    format: Format,
}

impl DefinitionFile {
    /// Locate the definition file under the given root.
    ///
    /// Search order: `enums.yaml`, `enums.json`, `enum/enums.yaml`,
    /// `enum/enums.json`. The first existing file wins; the rest are
    /// never read.
    pub fn locate(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let candidates = [
            (root.join(YAML_FILE), Format::Yaml),
            (root.join(JSON_FILE), Format::Json),
            (root.join(ENUM_DIR).join(YAML_FILE), Format::Yaml),
            (root.join(ENUM_DIR).join(JSON_FILE), Format::Json),
        ];

        for (path, format) in candidates {
            if path.is_file() {
                return Ok(Self { path, format });
            }
        }

        Err(Box::new(Error::NoDefinitionFile {
            searched: root.to_path_buf(),
        }))
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the detected format.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Read the file and parse the definition list.
    pub fn load(&self) -> Result<Vec<EnumDefinition>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Box::new(Error::Read {
                path: self.path.clone(),
                source: e,
            })
        })?;
        let filename = self.path.display().to_string();
        match self.format {
            Format::Yaml => parse::parse_yaml(&content, &filename),
            Format::Json => parse::parse_json(&content, &filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const ROLES_YAML: &str = "- name: role\n  values:\n    - key: admin\n    - key: user\n";
    const ROLES_JSON: &str = r#"[{"name": "role", "values": [{"key": "admin"}]}]"#;

    #[test]
    fn test_locate_prefers_yaml_in_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(YAML_FILE), ROLES_YAML).unwrap();
        fs::write(temp.path().join(JSON_FILE), ROLES_JSON).unwrap();

        let file = DefinitionFile::locate(temp.path()).unwrap();

        assert_eq!(file.format(), Format::Yaml);
        assert_eq!(file.path(), temp.path().join(YAML_FILE));
    }

    #[test]
    fn test_locate_falls_back_to_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(JSON_FILE), ROLES_JSON).unwrap();

        let file = DefinitionFile::locate(temp.path()).unwrap();

        assert_eq!(file.format(), Format::Json);
    }

    #[test]
    fn test_locate_checks_enum_dir_last() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(ENUM_DIR)).unwrap();
        fs::write(temp.path().join(ENUM_DIR).join(YAML_FILE), ROLES_YAML).unwrap();

        let file = DefinitionFile::locate(temp.path()).unwrap();

        assert_eq!(file.path(), temp.path().join(ENUM_DIR).join(YAML_FILE));
    }

    #[test]
    fn test_locate_root_file_shadows_enum_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(ENUM_DIR)).unwrap();
        fs::write(temp.path().join(ENUM_DIR).join(YAML_FILE), ROLES_YAML).unwrap();
        fs::write(temp.path().join(JSON_FILE), ROLES_JSON).unwrap();

        let file = DefinitionFile::locate(temp.path()).unwrap();

        assert_eq!(file.path(), temp.path().join(JSON_FILE));
        assert_eq!(file.format(), Format::Json);
    }

    #[test]
    fn test_locate_fails_when_nothing_found() {
        let temp = TempDir::new().unwrap();

        let err = DefinitionFile::locate(temp.path()).unwrap_err();

        assert!(matches!(*err, Error::NoDefinitionFile { .. }));
    }

    #[test]
    fn test_load_yaml_definitions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(YAML_FILE), ROLES_YAML).unwrap();

        let definitions = DefinitionFile::locate(temp.path()).unwrap().load().unwrap();

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].name, "role");
        assert_eq!(definitions[0].plural, None);
        assert_eq!(definitions[0].values.len(), 2);
        assert_eq!(definitions[0].values[0].key, "admin");
    }

    #[test]
    fn test_load_json_definitions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(JSON_FILE), ROLES_JSON).unwrap();

        let definitions = DefinitionFile::locate(temp.path()).unwrap().load().unwrap();

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].values[0].key, "admin");
        assert_eq!(definitions[0].values[0].value, None);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(JSON_FILE), r#"{"name": "not a list"}"#).unwrap();

        let err = DefinitionFile::locate(temp.path()).unwrap().load().unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }
}
