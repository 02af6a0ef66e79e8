//! Repository resource: desired state, mapping and reconciliation.
//!
//! This module holds the typed desired state, the local record written back
//! after each operation, and the lifecycle operations that reconcile the two
//! against the hosting API.

mod mapper;
pub mod reconciler;
mod state;

pub use mapper::to_request;
pub use reconciler::{create, delete, import, read, update};
pub use state::{ComputedAttributes, DesiredState, RepositoryResource};
