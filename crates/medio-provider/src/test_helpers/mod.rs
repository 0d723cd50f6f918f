//! Test support: in-memory object store.

mod mock_store;

pub use mock_store::{MockStore, RecordedCall, StoreOp};
