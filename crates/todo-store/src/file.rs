//! Store file persistence with XDG path support.
//!
//! The store is kept as JSON at `~/.local/share/td/todos.json` on Linux.
//!
//! Both synchronous and asynchronous I/O methods are provided:
//! - `save()`, `load()` - Synchronous methods using `std::fs`
//! - `save_async()`, `load_async()` - Asynchronous methods using `tokio::fs`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::Store;

/// Default store filename.
const STORE_FILENAME: &str = "todos.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "td";

/// Errors that can occur while reading or writing the store file.
#[derive(Debug, Error)]
pub enum StoreFileError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read store file '{path}': {source}")]
    ReadError {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write store file '{path}': {source}")]
    WriteError {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create data directory '{path}': {source}")]
    CreateDirError {
        /// The directory path that failed to create.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error during file delete.
    #[error("failed to delete store file '{path}': {source}")]
    DeleteError {
        /// The path that failed to delete.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store file operations.
pub type Result<T> = std::result::Result<T, StoreFileError>;

/// Location of the store on disk.
///
/// # Example
///
/// ```no_run
/// use todo_store::StoreFile;
///
/// let file = StoreFile::new()?;
///
/// // Load the existing store or start with an empty one
/// let mut store = file.load_or_default()?;
///
/// file.save(&mut store)?;
/// # Ok::<(), todo_store::StoreFileError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Creates a `StoreFile` at the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `StoreFileError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a `StoreFile` at a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default XDG data path for the store file.
    ///
    /// On Unix: `~/.local/share/td/todos.json`
    /// On macOS: `~/Library/Application Support/td/todos.json`
    /// On Windows: `C:\Users\<User>\AppData\Roaming\td\data\todos.json`
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(StoreFileError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(STORE_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the store file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the store from disk.
    ///
    /// A store missing its inbox gets one back.
    ///
    /// # Errors
    ///
    /// - Returns `StoreFileError::ReadError` if the file cannot be read.
    /// - Returns `StoreFileError::Json` if the file contains invalid JSON.
    pub fn load(&self) -> Result<Store> {
        let contents = fs::read_to_string(&self.path).map_err(|e| StoreFileError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        self.parse(&contents)
    }

    /// Loads the store, returning an empty one if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// - Returns `StoreFileError::ReadError` for I/O errors other than "file not found".
    /// - Returns `StoreFileError::Json` if the file contains invalid JSON.
    pub fn load_or_default(&self) -> Result<Store> {
        match self.load() {
            Ok(store) => Ok(store),
            Err(StoreFileError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                debug!(path = %self.path.display(), "no store file, starting empty");
                Ok(Store::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Stamps and saves the store atomically.
    ///
    /// Creates the parent directory if it doesn't exist. Writes to a temp
    /// file first, then renames it over the store file.
    ///
    /// # Errors
    ///
    /// - Returns `StoreFileError::CreateDirError` if the directory cannot be created.
    /// - Returns `StoreFileError::WriteError` if the file cannot be written.
    /// - Returns `StoreFileError::Json` if serialization fails.
    pub fn save(&self, store: &mut Store) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent).map_err(|e| StoreFileError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        store.touch();
        let json = serde_json::to_string_pretty(store)?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, &json).map_err(|e| StoreFileError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreFileError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), items = store.items.len(), "saved store");
        Ok(())
    }

    /// Deletes the store file. A missing file is not an error.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreFileError::DeleteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    // =========================================================================
    // Async I/O Methods
    // =========================================================================

    /// Async equivalent of [`load()`](Self::load).
    pub async fn load_async(&self) -> Result<Store> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| StoreFileError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })?;
        self.parse(&contents)
    }

    /// Async equivalent of [`load_or_default()`](Self::load_or_default).
    pub async fn load_or_default_async(&self) -> Result<Store> {
        match self.load_async().await {
            Ok(store) => Ok(store),
            Err(StoreFileError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                debug!(path = %self.path.display(), "no store file, starting empty");
                Ok(Store::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Async equivalent of [`save()`](Self::save).
    pub async fn save_async(&self, store: &mut Store) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreFileError::CreateDirError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        store.touch();
        let json = serde_json::to_string_pretty(store)?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &json)
            .await
            .map_err(|e| StoreFileError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreFileError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), items = store.items.len(), "saved store");
        Ok(())
    }

    /// Async equivalent of [`delete()`](Self::delete).
    pub async fn delete_async(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreFileError::DeleteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn parse(&self, contents: &str) -> Result<Store> {
        let mut store: Store = serde_json::from_str(contents)?;
        if store.ensure_inbox() {
            debug!(path = %self.path.display(), "restored missing inbox list");
        }
        Ok(store)
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}
