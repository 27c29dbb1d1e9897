//! Orchestration services for the board context.

mod store;

pub use store::{BoardStore, BoardStoreError};
