//! # ghrepo-core
//!
//! Core library for reconciling declared GitHub repositories with the
//! hosting API.
//!
//! A caller (the `ghrepo` CLI or any embedding engine) holds one
//! [`RepositoryResource`] per managed repository and drives it through the
//! lifecycle operations in [`resource`], passing an [`Organization`] and a
//! cancellation token into every call.
//!
//! ## Architecture
//!
//! - [`resource`] - Desired state, mapping to API requests, and the reconciler
//! - [`remote`] - Remote client trait and its HTTP implementation
//! - [`config`] - Provider configuration and manifest loading
//! - [`error`] - Error types for the library
//!
//! ## Example
//!
//! ```rust,ignore
//! use ghrepo_core::{DesiredState, Organization, ProviderConfig, RepositoryResource, resource};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ghrepo_core::Error> {
//!     let org = Organization::from_config(&ProviderConfig::load()?)?;
//!     let mut repo = RepositoryResource::new(DesiredState::new("demo"));
//!     resource::create(&org, &mut repo, &CancellationToken::new()).await
//! }
//! ```

pub mod config;
pub mod error;
mod organization;
pub mod remote;
pub mod resource;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use organization::Organization;
pub use resource::{ComputedAttributes, DesiredState, RepositoryResource};
