//! Disk I/O helpers: load from file and atomic write.
//!
//! The rename-over approach is close to atomic on most platforms. On NTFS
//! (Windows) it's reliable; on FAT32 or network shares there are no hard
//! guarantees.

use crate::error::{Error, Result};
use crate::serializer::Serializer;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads and decodes the whole file at `path`. A missing file is an error:
/// the store never invents an empty collection on read.
pub fn load<R, S>(path: &Path, serializer: &S) -> Result<Vec<R>>
where
    R: DeserializeOwned,
    S: Serializer,
{
    let bytes = std::fs::read(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
    serializer.deserialize(&bytes)
}

/// Write `bytes` to `<path>.tmp`, fsync it, then rename over `path`. A crash
/// or power loss mid-write leaves either the old file or the new one.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);
    if let Err(e) = write_synced(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(Error::Io(format!("{}: {e}", tmp.display())));
    }
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(Error::Io(format!("{}: {e}", path.display())));
    }
    Ok(())
}

fn write_synced(tmp: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Sibling path used for in-flight writes: the full file name plus `.tmp`,
/// e.g. `books.json` -> `books.json.tmp`, `books` -> `books.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
