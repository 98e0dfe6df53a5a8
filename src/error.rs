//! Error type shared by the codec, the file helpers and the record store.

/// Why a read or rewrite of the record file did not go through.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The record file (or its temp sibling) could not be read, written,
    /// synced or renamed.
    Io(String),
    /// The in-memory collection could not be encoded.
    Serialize(String),
    /// File contents are not a record or list of records.
    Deserialize(String),
    /// Rejected builder setting, such as an empty path.
    Config(String),
    /// `add` with an id that is already stored (only when unique ids are on).
    DuplicateId(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "i/o error: {msg}"),
            Error::Serialize(msg) => write!(f, "serialization error: {msg}"),
            Error::Deserialize(msg) => write!(f, "deserialization error: {msg}"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.to_string())
        } else if err.is_syntax() || err.is_eof() || err.is_data() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Serialize(err.to_string())
        }
    }
}

/// Result of every store, codec and persistence call.
pub type Result<T> = std::result::Result<T, Error>;
