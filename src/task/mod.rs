//! Task tracking module
//!
//! This module owns the task data and its persistence:
//! - Task model (id, description, completion state, creation time)
//! - JSON file store with save-on-every-mutation semantics

pub mod error;
pub mod model;
pub mod store;

pub use error::StoreError;
pub use model::Task;
pub use store::TaskStore;
