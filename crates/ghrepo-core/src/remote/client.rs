//! Remote client abstraction.

use async_trait::async_trait;

use super::types::{Repository, RepositoryRequest};
use crate::error::Result;

/// Authenticated access to the repository endpoints of the hosting API.
///
/// Implementations own connection handling, authentication and timeouts.
/// They must not retry: a failed call is reported to the reconciler as is.
/// A missing repository is reported as [`crate::Error::Remote`] with status
/// 404 so callers can tell it apart with [`crate::Error::is_not_found`].
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Create a repository under `owner`.
    async fn create(&self, owner: &str, request: &RepositoryRequest) -> Result<Repository>;

    /// Fetch `owner/name`.
    async fn get(&self, owner: &str, name: &str) -> Result<Repository>;

    /// Apply `request` to the existing repository `owner/name`.
    async fn edit(&self, owner: &str, name: &str, request: &RepositoryRequest)
    -> Result<Repository>;

    /// Delete `owner/name`.
    async fn delete(&self, owner: &str, name: &str) -> Result<()>;
}
