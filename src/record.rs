//! What the store needs to know about a stored record.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A value that can live in a [`RecordStore`](crate::RecordStore).
///
/// The store treats records as opaque apart from three things: full value
/// equality (used by `remove`), the identifier (used by `update` and the
/// optional uniqueness check), and which fields an update carries over.
pub trait Record: Serialize + DeserializeOwned + PartialEq + Send + Sync {
    /// Identifier type. Expected to be unique within a collection, though the
    /// store only enforces that when asked to.
    type Id: PartialEq + Debug;

    /// This record's identifier.
    fn id(&self) -> &Self::Id;

    /// Copy the updatable fields of `incoming` onto `self`. Everything else on
    /// the stored record must stay as it is.
    fn apply_update(&mut self, incoming: &Self);
}
