use crate::api::LibraryApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct ShelfContext {
    pub api: LibraryApi<FileStore>,
}

pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Config("Could not determine data dir".to_string()))
}

/// Pick the library file: explicit override, then config, then default.
/// An unreadable config falls back to defaults.
pub fn resolve_library_path(data_dir: &Path, file_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = file_override {
        return path;
    }

    let config = ShelfConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        ShelfConfig::default()
    });
    config.library_path(data_dir)
}

pub fn initialize(file_override: Option<PathBuf>) -> Result<ShelfContext> {
    let library_path = match file_override {
        Some(path) => path,
        None => resolve_library_path(&default_data_dir()?, None),
    };
    debug!(path = %library_path.display(), "using library file");

    let api = LibraryApi::open(FileStore::new(&library_path))?;
    Ok(ShelfContext { api })
}
