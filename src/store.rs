//! Core store type and builder.

use crate::error::{Error, Result};
use crate::persist::{atomic_write, load};
use crate::record::Record;
use crate::serializer::{JsonSerializer, Serializer};
use parking_lot::RwLock;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File-backed collection of records.
///
/// The file is the only source of truth: each call decodes it in full, works
/// on a throwaway `Vec`, and (for mutations) writes the whole collection back.
/// A readers-writer lock makes that safe across threads. [`list`](Self::list)
/// takes it shared, so reads run side by side; [`add`](Self::add),
/// [`remove`](Self::remove) and [`update`](Self::update) take it exclusively
/// for the full read-modify-write cycle, so no reader ever sees a write in
/// progress.
///
/// Share it between threads with an `Arc`. Calls block for the duration of
/// their file I/O.
pub struct RecordStore<R> {
    path: PathBuf,
    serializer: JsonSerializer,
    unique_ids: bool,
    lock: RwLock<()>,
    _marker: PhantomData<R>,
}

impl<R: Record> RecordStore<R> {
    /// Open a store over an existing file with the default settings
    /// (pretty output, no file creation, duplicate ids allowed).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder(path).build()
    }

    /// Start configuring a new store. Call [`.build()`](RecordStoreBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> RecordStoreBuilder<R> {
        RecordStoreBuilder::new(path)
    }

    // ---- reads ----

    /// All stored records, in file order.
    pub fn list(&self) -> Result<Vec<R>> {
        let _guard = self.lock.read();
        let records: Vec<R> =
            load(&self.path, &self.serializer).map_err(|e| self.failed("list", e))?;
        debug!(path = %self.path.display(), count = records.len(), "listed records");
        Ok(records)
    }

    /// Like [`list`](Self::list), but a failed read is logged and comes back
    /// as an empty collection instead of an error.
    #[must_use]
    pub fn list_or_empty(&self) -> Vec<R> {
        self.list().unwrap_or_default()
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---- writes ----

    /// Append `record` to the end of the collection.
    ///
    /// Ids are not checked unless the store was built with
    /// [`unique_ids(true)`](RecordStoreBuilder::unique_ids), in which case a
    /// clash fails with [`Error::DuplicateId`] and nothing is written.
    pub fn add(&self, record: R) -> Result<()> {
        let unique_ids = self.unique_ids;
        self.read_modify_write("add", move |records| {
            if unique_ids && records.iter().any(|r| r.id() == record.id()) {
                return Err(Error::DuplicateId(format!("{:?}", record.id())));
            }
            records.push(record);
            Ok(())
        })
    }

    /// Remove the first stored record equal to `record`. Returns `false` if
    /// there was none; the file is rewritten either way.
    pub fn remove(&self, record: &R) -> Result<bool> {
        self.read_modify_write("remove", |records| {
            match records.iter().position(|r| r == record) {
                Some(idx) => {
                    records.remove(idx);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    /// Find the first stored record with the same id as `record` and copy its
    /// updatable fields over (see [`Record::apply_update`]). All other fields
    /// of the stored record are kept. Returns `false` if no id matched; the
    /// file is rewritten either way.
    pub fn update(&self, record: &R) -> Result<bool> {
        self.read_modify_write("update", |records| {
            match records.iter_mut().find(|r| r.id() == record.id()) {
                Some(stored) => {
                    stored.apply_update(record);
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    // ---- internal ----

    /// Exclusive decode → mutate → encode → write. Nothing is written if the
    /// decode or the mutation fails.
    fn read_modify_write<T, F>(&self, op: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<R>) -> Result<T>,
    {
        let _guard = self.lock.write();
        self.rewrite(op, f).map_err(|e| self.failed(op, e))
    }

    fn rewrite<T, F>(&self, op: &'static str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<R>) -> Result<T>,
    {
        let mut records: Vec<R> = load(&self.path, &self.serializer)?;
        let out = f(&mut records)?;
        let bytes = self.serializer.serialize(&records)?;
        atomic_write(&self.path, &bytes)?;
        debug!(op, path = %self.path.display(), count = records.len(), "rewrote record file");
        Ok(out)
    }

    fn failed(&self, op: &'static str, err: Error) -> Error {
        warn!(op, path = %self.path.display(), error = %err, "record store operation failed");
        err
    }
}

impl<R> std::fmt::Debug for RecordStore<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("path", &self.path)
            .field("pretty", &self.serializer.is_pretty())
            .field("unique_ids", &self.unique_ids)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures and opens a [`RecordStore`].
///
/// ```rust,no_run
/// use book_store::{Book, RecordStore};
///
/// let store = RecordStore::<Book>::builder("books.json")
///     .create_if_missing(true)
///     .unique_ids(true)
///     .build()
///     .unwrap();
/// ```
pub struct RecordStoreBuilder<R> {
    path: PathBuf,
    pretty: bool,
    create_if_missing: bool,
    unique_ids: bool,
    _marker: PhantomData<R>,
}

impl<R: Record> RecordStoreBuilder<R> {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
            create_if_missing: false,
            unique_ids: false,
            _marker: PhantomData,
        }
    }

    /// Write human-readable JSON with indentation (default: on).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Initialise a missing file with an empty collection when the store is
    /// built (default: off, the file must already exist).
    pub fn create_if_missing(mut self, yes: bool) -> Self {
        self.create_if_missing = yes;
        self
    }

    /// Reject [`add`](RecordStore::add) of a record whose id is already
    /// stored (default: off).
    pub fn unique_ids(mut self, yes: bool) -> Self {
        self.unique_ids = yes;
        self
    }

    /// Validate the configuration and return the store.
    pub fn build(self) -> Result<RecordStore<R>> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::Config("store path is empty".into()));
        }

        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };

        if self.create_if_missing && !self.path.try_exists()? {
            let bytes = serializer.serialize::<R>(&[])?;
            atomic_write(&self.path, &bytes)?;
            info!(path = %self.path.display(), "created empty record file");
        }

        Ok(RecordStore {
            path: self.path,
            serializer,
            unique_ids: self.unique_ids,
            lock: RwLock::new(()),
            _marker: PhantomData,
        })
    }
}

impl<R> std::fmt::Debug for RecordStoreBuilder<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStoreBuilder")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .field("create_if_missing", &self.create_if_missing)
            .field("unique_ids", &self.unique_ids)
            .finish()
    }
}
