//! Document Store
//!
//! The store is the only component that touches the inventory file. Reads
//! take a shared lock and writes take an exclusive one, so any number of
//! readers may run together while a writer always runs alone. Documents are
//! fully encoded in memory and then written to a sibling staging file that is
//! renamed over the live file, so a reader never sees a torn document.
//!
//! The lock is process-local; sharing one file between processes is not
//! supported.

use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
    sync::RwLock,
};
use tracing::{debug, info};

mod document;
mod errors;

pub use document::Document;
pub use errors::StoreError;

const STAGING_SUFFIX: &str = ".tmp";

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    lock: RwLock<()>,
}

impl Store {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the containing directory and the document exist, writing an
    /// empty document when the file is absent. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the directory or the file cannot be
    /// created.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        if exists {
            debug!(path = %self.path.display(), "inventory document already present");

            return Ok(());
        }

        let bytes = Document::default().encode().map_err(StoreError::Encode)?;

        self.replace(&bytes).await?;

        info!(path = %self.path.display(), "created empty inventory document");

        Ok(())
    }

    /// Read a full snapshot of the document under the shared lock.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the file cannot be read and
    /// [`StoreError::Corrupt`] when its content is not a valid document.
    pub async fn read_all(&self) -> Result<Document, StoreError> {
        let _guard = self.lock.read().await;

        self.load().await
    }

    /// Overwrite the document in full under the exclusive lock.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the file cannot be written.
    pub async fn write_all(&self, document: &Document) -> Result<(), StoreError> {
        let bytes = document.encode().map_err(StoreError::Encode)?;

        let _guard = self.lock.write().await;

        self.replace(&bytes).await
    }

    /// Load the document, apply `change` and persist the result, all while
    /// holding the exclusive lock. Nothing is written when `change` fails.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `change`, or any [`StoreError`] raised
    /// while loading or persisting the document.
    pub async fn mutate<T, E, F>(&self, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.write().await;

        let mut document = self.load().await?;

        let output = change(&mut document)?;

        let bytes = document.encode().map_err(StoreError::Encode)?;

        self.replace(&bytes).await?;

        Ok(output)
    }

    async fn load(&self) -> Result<Document, StoreError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        Document::decode(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn replace(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let staging = self.staging_path();

        let mut file = File::create(&staging)
            .await
            .map_err(|source| self.io_error(source))?;

        file.write_all(bytes)
            .await
            .map_err(|source| self.io_error(source))?;

        file.sync_all()
            .await
            .map_err(|source| self.io_error(source))?;

        drop(file);

        fs::rename(&staging, &self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "wrote inventory document");

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();

        name.push(STAGING_SUFFIX);

        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
