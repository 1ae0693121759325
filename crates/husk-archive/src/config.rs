use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Extraction settings.
///
/// `tmp_path` is where two-stage extractions stage their intermediate file;
/// it is read once per extraction call. Defaults to the system temp
/// directory.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    pub tmp_path: PathBuf,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            tmp_path: std::env::temp_dir(),
        }
    }
}

impl ArchiveConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    pub fn tmp_path(mut self, tmp_path: impl Into<PathBuf>) -> Self {
        self.tmp_path = tmp_path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_system_temp_dir() {
        assert_eq!(ArchiveConfig::default().tmp_path, std::env::temp_dir());
    }

    #[test]
    fn parses_tmp_path_from_toml() {
        let config = ArchiveConfig::from_toml_str(r#"tmp_path = "/var/tmp/husk""#).unwrap();
        assert_eq!(config.tmp_path, Path::new("/var/tmp/husk"));
    }

    #[test]
    fn empty_toml_falls_back_to_default() {
        let config = ArchiveConfig::from_toml_str("").unwrap();
        assert_eq!(config.tmp_path, std::env::temp_dir());
    }

    #[test]
    fn builder_overrides_tmp_path() {
        let config = ArchiveConfig::default().tmp_path("/scratch");
        assert_eq!(config.tmp_path, Path::new("/scratch"));
    }
}
