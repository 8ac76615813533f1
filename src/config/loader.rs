//! Configuration Loader (Figment-based)
//!
//! Merge order: built-in defaults, then the project file `.testloom.toml`
//! if present, then `TESTLOOM_*` environment variables.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{LoomError, Result};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain.
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // e.g. TESTLOOM_OUTPUT_DIR -> output.dir
        figment = figment.merge(Env::prefixed("TESTLOOM_").split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| LoomError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| LoomError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Path to the project config file, relative to the working directory.
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".testloom.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_default_config() {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_load_from_file_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("testloom.toml");
        fs::write(
            &path,
            "[output]\ndir = \"generated\"\n\n[analysis]\nmax_file_size = 2048\n",
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("generated"));
        assert_eq!(config.analysis.max_file_size, 2048);
        // Untouched sections keep their defaults.
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_load_from_file_invalid_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("testloom.toml");
        fs::write(&path, "[analysis]\nmax_file_size = 0\n").unwrap();

        assert!(ConfigLoader::load_from_file(&path).is_err());
    }
}
