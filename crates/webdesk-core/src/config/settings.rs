//! Application configuration loaded from a TOML file.
//!
//! All fields have defaults, so WebDesk works without a config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level configuration for the file-system core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Naming preferences for the tree itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Name given to the root directory.
    #[serde(default = "default_root_name")]
    pub root_name: String,
    /// Suffix appended to a file's name when it is duplicated.
    #[serde(default = "default_copy_suffix")]
    pub copy_suffix: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            copy_suffix: default_copy_suffix(),
        }
    }
}

/// Search behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of hits returned by a fuzzy search.
    #[serde(default = "default_fuzzy_max_results")]
    pub fuzzy_max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_max_results: default_fuzzy_max_results(),
        }
    }
}

fn default_root_name() -> String {
    "root".to_string()
}

fn default_copy_suffix() -> String {
    " copy".to_string()
}

fn default_fuzzy_max_results() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.general.root_name, "root");
        assert_eq!(config.general.copy_suffix, " copy");
        assert_eq!(config.search.fuzzy_max_results, 50);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
root_name = "home"
copy_suffix = " (copy)"

[search]
fuzzy_max_results = 10
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.general.root_name, "home");
        assert_eq!(config.general.copy_suffix, " (copy)");
        assert_eq!(config.search.fuzzy_max_results, 10);
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[general]
root_name = "desktop"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.general.root_name, "desktop");
        assert_eq!(config.general.copy_suffix, " copy");
        assert_eq!(config.search.fuzzy_max_results, 50);
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.general.root_name, "root");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");

        assert!(matches!(
            Config::load(&path),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn load_malformed_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[general\nroot_name = ").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(CoreError::ConfigParse(_))
        ));
    }
}
