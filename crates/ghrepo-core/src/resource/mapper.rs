//! Desired state to request payload.

use super::state::DesiredState;
use crate::remote::RepositoryRequest;

/// Build the base request payload for `desired`.
///
/// Every field is copied as is; empty strings and `false` are explicit
/// values. `default_branch` is left unset: it is never valid on create and
/// the update path decides separately whether to forward it.
#[must_use]
pub fn to_request(desired: &DesiredState) -> RepositoryRequest {
    RepositoryRequest {
        name: desired.name.clone(),
        description: desired.description.clone(),
        homepage: desired.homepage_url.clone(),
        private: desired.private,
        has_issues: desired.has_issues,
        has_wiki: desired.has_wiki,
        allow_merge_commit: desired.allow_merge_commit,
        allow_squash_merge: desired.allow_squash_merge,
        allow_rebase_merge: desired.allow_rebase_merge,
        has_downloads: desired.has_downloads,
        auto_init: desired.auto_init,
        license_template: desired.license_template.clone(),
        gitignore_template: desired.gitignore_template.clone(),
        default_branch: None,
    }
}
