//! File-backed JSON store for library book records.
//!
//! The whole collection lives in one JSON file. Every operation reads the
//! file, applies its change and writes the file back (temp-file + rename),
//! all under a readers-writer lock: `list` shares it, `add` / `remove` /
//! `update` take it exclusively.
//!
//! ```rust,no_run
//! use book_store::{Book, BookStatus, RecordStore};
//! use chrono::Utc;
//!
//! let store = RecordStore::<Book>::builder("books.json")
//!     .create_if_missing(true)
//!     .build()
//!     .unwrap();
//! store.add(Book::new(1, "Dune", "Frank Herbert")).unwrap();
//!
//! let borrowed = Book::new(1, "", "").with_status(BookStatus::Borrowed, Utc::now());
//! store.update(&borrowed).unwrap();
//! ```
//!
//! **Single-process only.** The lock coordinates threads sharing one
//! [`RecordStore`]; separate processes opening the same file are not
//! coordinated.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod error;
pub mod persist;
pub mod record;
pub mod serializer;
pub mod store;

pub use book::{Book, BookStatus};
pub use error::{Error, Result};
pub use record::Record;
pub use store::{RecordStore, RecordStoreBuilder};

/// Store of [`Book`] records, the common case.
pub type BookStore = RecordStore<Book>;
