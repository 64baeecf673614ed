use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// JSON-file backed store. The path is fixed at construction.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "library file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!(path = %self.path.display(), "library file is not valid UTF-8, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ShelfError::Io(e)),
        };

        match serde_json::from_str::<Vec<Book>>(&content) {
            Ok(books) => {
                debug!(path = %self.path.display(), count = books.len(), "loaded library");
                Ok(books)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "library file is corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        self.ensure_dir(dir)?;

        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;

        let tmp_file = dir.join(format!(".library-{}.tmp", Uuid::new_v4()));
        let written =
            fs::write(&tmp_file, content).and_then(|()| fs::rename(&tmp_file, &self.path));
        if let Err(e) = written {
            // The temp file may exist whether the write or the rename failed
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(e));
        }

        debug!(path = %self.path.display(), count = books.len(), "saved library");
        Ok(())
    }
}
