//! The book record persisted by the library application.

use crate::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a book is in its lending lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookStatus {
    /// On the shelf.
    #[default]
    Available,
    /// Lent out.
    Borrowed,
    /// Missing from the collection.
    Lost,
}

/// One book as stored on disk.
///
/// Encoded with camelCase field names; `lastModifiedTime` is an RFC 3339
/// string. Files written with the shorter `lastModified` key still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Stable identifier, assigned by the caller before the book is stored.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
    /// Lending status.
    pub status: BookStatus,
    /// When `status` last changed.
    #[serde(rename = "lastModifiedTime", alias = "lastModified")]
    pub last_modified: DateTime<Utc>,
}

impl Book {
    /// A new, available book stamped with the current time.
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            status: BookStatus::Available,
            last_modified: Utc::now(),
        }
    }

    /// Same book with a new status, stamped at `at`.
    #[must_use]
    pub fn with_status(mut self, status: BookStatus, at: DateTime<Utc>) -> Self {
        self.status = status;
        self.last_modified = at;
        self
    }
}

impl Record for Book {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }

    // title and author stay with the stored copy
    fn apply_update(&mut self, incoming: &Self) {
        self.status = incoming.status;
        self.last_modified = incoming.last_modified;
    }
}
