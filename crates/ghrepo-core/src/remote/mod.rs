//! Remote client for the hosting service.
//!
//! This module provides the [`RepositoryClient`] seam the reconciler talks
//! to, the wire types exchanged with the API, and an HTTP implementation.

mod client;
mod http;
mod types;

pub use client::RepositoryClient;
pub use http::HttpRepositoryClient;
pub use types::{Repository, RepositoryRequest};
