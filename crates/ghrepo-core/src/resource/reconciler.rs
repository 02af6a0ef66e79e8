//! Repository lifecycle operations.
//!
//! Each operation is one step of a reconciliation pass:
//! 1. `create` - absent to present
//! 2. `read` - refresh from the API, or drop the identifier on drift
//! 3. `update` - apply a new desired state in place
//! 4. `delete` - present to absent
//! 5. `import` - adopt an existing repository by name
//!
//! Operations never retry. A failed call leaves the record as it was before
//! the operation started, except when the mutating call succeeds and only
//! the follow-up read fails. Then the record keeps what the API accepted:
//! create keeps the new identifier, update keeps the new desired state and
//! identifier.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::mapper::to_request;
use super::state::{DesiredState, RepositoryResource};
use crate::error::{Error, Result};
use crate::organization::Organization;

/// Branch the API creates implicitly; never forwarded explicitly.
const IMPLICIT_DEFAULT_BRANCH: &str = "master";

/// Run a remote call unless `cancel` fires first.
async fn cancellable<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(Error::Cancelled),
        result = call => result,
    }
}

/// Default branch to forward on update, if any.
fn forwarded_default_branch(desired: &DesiredState) -> Option<String> {
    desired
        .explicit_default_branch()
        .filter(|branch| *branch != IMPLICIT_DEFAULT_BRANCH)
        .map(str::to_string)
}

fn require_id(resource: &RepositoryResource) -> Result<String> {
    resource
        .id()
        .map(str::to_string)
        .ok_or(Error::MissingIdentifier)
}

/// Create the repository described by `resource.desired`.
///
/// On success the identifier is set to the returned name and the record is
/// refreshed with a read.
///
/// # Errors
///
/// Returns [`Error::Validation`] without calling the API if a default branch
/// is set. Remote errors are returned unchanged.
pub async fn create(
    org: &Organization,
    resource: &mut RepositoryResource,
    cancel: &CancellationToken,
) -> Result<()> {
    if resource.desired.explicit_default_branch().is_some() {
        return Err(Error::Validation(
            "cannot set default branch on a new repository".to_string(),
        ));
    }
    resource.desired.validate()?;

    let request = to_request(&resource.desired);
    debug!("create github repository {}/{}", org.name(), request.name);
    let repo = cancellable(cancel, org.client().create(org.name(), &request)).await?;

    resource.id = Some(repo.name);
    read(org, resource, cancel).await
}

/// Refresh the record from the API.
///
/// A missing repository is not an error: the identifier and the observed
/// default branch are cleared so the caller recreates it on the next pass.
///
/// # Errors
///
/// Returns [`Error::MissingIdentifier`] if the record has no identifier.
/// Remote errors other than not-found are returned unchanged.
pub async fn read(
    org: &Organization,
    resource: &mut RepositoryResource,
    cancel: &CancellationToken,
) -> Result<()> {
    let id = require_id(resource)?;

    debug!("read github repository {}/{}", org.name(), id);
    match cancellable(cancel, org.client().get(org.name(), &id)).await {
        Ok(repo) => {
            resource.refresh_from(&id, repo);
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            warn!(
                "removing {}/{} from state because it no longer exists in github",
                org.name(),
                id
            );
            resource.id = None;
            // Observed from the API, never declared; create rejects it.
            resource.desired.default_branch = None;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Apply `desired` to the existing repository.
///
/// The default branch is forwarded only when set and not `master`. On
/// success the identifier is taken from the returned name, which may differ
/// in casing, and the record is refreshed with a read. If only that read
/// fails, the new desired state and identifier are kept.
///
/// # Errors
///
/// Returns [`Error::MissingIdentifier`] if the record has no identifier, and
/// [`Error::Validation`] if `desired` renames the repository. Remote errors
/// are returned unchanged.
pub async fn update(
    org: &Organization,
    resource: &mut RepositoryResource,
    desired: DesiredState,
    cancel: &CancellationToken,
) -> Result<()> {
    let id = require_id(resource)?;
    desired.validate()?;
    if !id.eq_ignore_ascii_case(&desired.name) {
        return Err(Error::Validation(format!(
            "repository name cannot change from '{id}' to '{}'; it must be replaced",
            desired.name
        )));
    }

    let mut request = to_request(&desired);
    request.default_branch = forwarded_default_branch(&desired);

    debug!("update github repository {}/{}", org.name(), id);
    let repo = cancellable(cancel, org.client().edit(org.name(), &id, &request)).await?;

    resource.desired = desired;
    resource.id = Some(repo.name);
    read(org, resource, cancel).await
}

/// Delete the repository. The identifier is cleared on success.
///
/// # Errors
///
/// Returns [`Error::MissingIdentifier`] if the record has no identifier.
/// Remote errors are returned unchanged.
pub async fn delete(
    org: &Organization,
    resource: &mut RepositoryResource,
    cancel: &CancellationToken,
) -> Result<()> {
    let id = require_id(resource)?;

    debug!("delete github repository {}/{}", org.name(), id);
    cancellable(cancel, org.client().delete(org.name(), &id)).await?;

    resource.id = None;
    Ok(())
}

/// Adopt the existing repository `name` into a fresh record.
///
/// # Errors
///
/// Returns [`Error::ImportTargetMissing`] if the repository does not exist.
/// Remote errors are returned unchanged.
pub async fn import(
    org: &Organization,
    name: &str,
    cancel: &CancellationToken,
) -> Result<RepositoryResource> {
    let mut resource = RepositoryResource::seeded(name);
    resource.desired.validate()?;

    debug!("import github repository {}/{}", org.name(), name);
    read(org, &mut resource, cancel).await?;

    if resource.is_present() {
        Ok(resource)
    } else {
        Err(Error::ImportTargetMissing {
            owner: org.name().to_string(),
            name: name.to_string(),
        })
    }
}
