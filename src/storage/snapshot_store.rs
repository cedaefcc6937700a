//! Snapshot Store - JSON file I/O for directory snapshots.
//!
//! The [`SnapshotStore`] handles the file side of persistence:
//! - Creating the snapshot's parent directory
//! - Writing a directory out as a JSON snapshot
//! - Reading a snapshot back and replaying it into a directory

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::config::DEFAULT_SNAPSHOT_PATH;
use crate::common::Result;
use crate::directory::StudentDirectory;
use crate::storage::{RestoreReport, Snapshot};

/// Reads and writes directory snapshots at a fixed path.
///
/// # Durability
/// Writes truncate the file in place and are not atomic. A crash while
/// saving can leave a partial file behind.
///
/// # Usage
/// ```no_run
/// use rosterdb::storage::SnapshotStore;
/// use rosterdb::StudentDirectory;
///
/// let store = SnapshotStore::new("data/students.json").unwrap();
/// let mut dir = StudentDirectory::new();
/// store.load_into(&mut dir).unwrap();
/// // ... edit ...
/// store.save(&dir).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for `path`, creating its parent directory if needed.
    ///
    /// The snapshot file itself is not touched.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { path })
    }

    /// Store at [`DEFAULT_SNAPSHOT_PATH`].
    pub fn open_default() -> Result<Self> {
        Self::new(DEFAULT_SNAPSHOT_PATH)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if a snapshot file exists at the path.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `directory` as pretty-printed JSON, replacing any previous
    /// snapshot.
    ///
    /// # Errors
    /// I/O errors from creating or writing the file.
    pub fn save(&self, directory: &StudentDirectory) -> Result<()> {
        let snapshot = Snapshot::from_directory(directory);

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writer.flush()?;

        tracing::debug!(
            target: "rosterdb::storage",
            path = %self.path.display(),
            records = snapshot.students.len(),
            "saved snapshot"
        );
        Ok(())
    }

    /// Read the snapshot, if there is one.
    ///
    /// Returns `Ok(None)` when no file exists at the path.
    ///
    /// # Errors
    /// I/O errors, or `Error::Json` if the file is not a valid snapshot.
    pub fn read(&self) -> Result<Option<Snapshot>> {
        if !self.exists() {
            return Ok(None);
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let snapshot = serde_json::from_reader(reader)?;
        Ok(Some(snapshot))
    }

    /// Replay the snapshot into `directory`.
    ///
    /// Records are added on top of whatever the directory already holds.
    /// Returns `Ok(None)` when no file exists at the path.
    ///
    /// # Errors
    /// Same as [`read`](Self::read). The directory is untouched on error.
    pub fn load_into(&self, directory: &mut StudentDirectory) -> Result<Option<RestoreReport>> {
        let Some(snapshot) = self.read()? else {
            tracing::debug!(
                target: "rosterdb::storage",
                path = %self.path.display(),
                "no snapshot to load"
            );
            return Ok(None);
        };

        let report = snapshot.restore_into(directory);

        tracing::debug!(
            target: "rosterdb::storage",
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "loaded snapshot"
        );
        Ok(Some(report))
    }
}
