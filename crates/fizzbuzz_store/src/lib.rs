//! Fizzbuzz store: persistent usage counter with single-writer serialization.
mod error;
mod persist;
mod snapshot;
mod store;

pub use error::StorageError;
pub use persist::{load_snapshot, write_snapshot_atomic};
pub use snapshot::CounterSnapshot;
pub use store::{CounterStore, StoreSettings};
