//! Project configuration
//!
//! Loaded from `filterlist.toml` (or `filterlist.json`) in the project root.
//! Every field is optional; an absent file means all defaults.

use filterlist_fs::{ConfigStore, NormalizedPath, ProjectPath};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::artifact::HeaderTemplate;

/// Alternative config file name, checked after `filterlist.toml`.
pub const JSON_CONFIG_FILE: &str = "filterlist.json";

/// Build configuration for a filter-list project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory of raw rule files, relative to the project root
    pub source_dir: String,
    /// Directory receiving artifacts, relative to the project root
    pub output_dir: String,
    /// Extension of rule files, without the dot
    pub extension: String,
    /// Static header lines
    pub header: HeaderTemplate,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: ProjectPath::SourceDir.as_str().to_string(),
            output_dir: ProjectPath::OutputDir.as_str().to_string(),
            extension: "txt".to_string(),
            header: HeaderTemplate::default(),
        }
    }
}

impl BuildConfig {
    /// Load the project configuration, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let store = ConfigStore::new();
        for file in [ProjectPath::ConfigFile.as_str(), JSON_CONFIG_FILE] {
            let path = root.join(file);
            if let Some(config) = store.load_optional::<Self>(&path)? {
                tracing::debug!(%path, "Loaded project config");
                return Ok(config);
            }
        }
        tracing::debug!(%root, "No project config found, using defaults");
        Ok(Self::default())
    }

    /// Write this configuration to `filterlist.toml` in `root`.
    pub fn save(&self, root: &NormalizedPath) -> Result<NormalizedPath> {
        let path = root.join(ProjectPath::ConfigFile.as_str());
        ConfigStore::new().save(&path, self)?;
        Ok(path)
    }

    pub fn source_path(&self, root: &NormalizedPath) -> NormalizedPath {
        NormalizedPath::new(&self.source_dir).resolve_against(root)
    }

    pub fn output_path(&self, root: &NormalizedPath) -> NormalizedPath {
        NormalizedPath::new(&self.output_dir).resolve_against(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = BuildConfig::load(&NormalizedPath::new(temp.path())).unwrap();
        assert_eq!(config, BuildConfig::default());
        assert_eq!(config.source_dir, "src");
        assert_eq!(config.output_dir, "filters");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("filterlist.toml"),
            "output_dir = \"public\"\n\n[header]\ntitle_prefix = \"Acme\"\n",
        )
        .unwrap();

        let config = BuildConfig::load(&NormalizedPath::new(temp.path())).unwrap();
        assert_eq!(config.output_dir, "public");
        assert_eq!(config.source_dir, "src");
        assert_eq!(config.header.title_prefix, "Acme");
        assert_eq!(config.header.expires, "4 hours (update frequency)");
    }

    #[test]
    fn json_config_is_read() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("filterlist.json"), r#"{"extension": "list"}"#).unwrap();

        let config = BuildConfig::load(&NormalizedPath::new(temp.path())).unwrap();
        assert_eq!(config.extension, "list");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("filterlist.toml"), "source_dir = [").unwrap();

        assert!(BuildConfig::load(&NormalizedPath::new(temp.path())).is_err());
    }

    #[test]
    fn save_then_load() {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        let mut config = BuildConfig::default();
        config.source_dir = "rules".to_string();

        let path = config.save(&root).unwrap();
        assert!(path.is_file());
        assert_eq!(BuildConfig::load(&root).unwrap(), config);
    }

    #[test]
    fn paths_resolve_against_root() {
        let root = NormalizedPath::new("/srv/lists");
        let config = BuildConfig {
            output_dir: "/var/www/filters".to_string(),
            ..BuildConfig::default()
        };
        assert_eq!(config.source_path(&root).as_str(), "/srv/lists/src");
        assert_eq!(config.output_path(&root).as_str(), "/var/www/filters");
    }
}
