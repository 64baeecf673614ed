use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Configuration for bookshelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Library file. Relative paths are resolved against the data dir.
    #[serde(default = "default_library_file")]
    pub library_file: String,
}

fn default_library_file() -> String {
    DEFAULT_LIBRARY_FILE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        if config.library_file.trim().is_empty() {
            return Err(ShelfError::Config("library_file must not be empty".into()));
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    /// Absolute location of the library file for this config.
    pub fn library_path(&self, data_dir: &Path) -> PathBuf {
        let file = Path::new(&self.library_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            data_dir.join(file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.library_file, "library.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("shelf");

        let config = ShelfConfig {
            library_file: "books.json".to_string(),
        };
        config.save(&dir).unwrap();

        let loaded = ShelfConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = ShelfConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.library_file, "library.json");
    }

    #[test]
    fn test_empty_library_file_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"library_file": " "}"#).unwrap();

        assert!(matches!(
            ShelfConfig::load(temp.path()),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn test_library_path_resolution() {
        let data_dir = Path::new("/data/shelf");
        let relative = ShelfConfig::default();
        assert_eq!(
            relative.library_path(data_dir),
            PathBuf::from("/data/shelf/library.json")
        );

        let absolute = ShelfConfig {
            library_file: "/elsewhere/books.json".to_string(),
        };
        assert_eq!(
            absolute.library_path(data_dir),
            PathBuf::from("/elsewhere/books.json")
        );
    }
}
