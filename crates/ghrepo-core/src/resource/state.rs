//! Desired state and the local record of a managed repository.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::remote::Repository;

/// Locally declared configuration of one repository.
///
/// Built once at the boundary (manifest file, embedding program), validated
/// there, and handed to the reconciler. Every field except `name` has a
/// default, so a record is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesiredState {
    /// Repository name. Changing it requires replacing the repository.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Project homepage URL.
    #[serde(default)]
    pub homepage_url: String,

    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,

    /// Whether issues are enabled.
    #[serde(default)]
    pub has_issues: bool,

    /// Whether the wiki is enabled.
    #[serde(default)]
    pub has_wiki: bool,

    /// Whether merge commits are allowed.
    #[serde(default = "default_true")]
    pub allow_merge_commit: bool,

    /// Whether squash merges are allowed.
    #[serde(default = "default_true")]
    pub allow_squash_merge: bool,

    /// Whether rebase merges are allowed.
    #[serde(default = "default_true")]
    pub allow_rebase_merge: bool,

    /// Whether downloads are enabled.
    #[serde(default)]
    pub has_downloads: bool,

    /// Create an initial commit on creation.
    #[serde(default)]
    pub auto_init: bool,

    /// Default branch. Can only be set once the repository exists and the
    /// branch has been pushed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,

    /// License template keyword applied on creation.
    #[serde(default)]
    pub license_template: String,

    /// Gitignore template applied on creation.
    #[serde(default)]
    pub gitignore_template: String,
}

const fn default_true() -> bool {
    true
}

impl DesiredState {
    /// Desired state for `name` with every other field at its default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            homepage_url: String::new(),
            private: false,
            has_issues: false,
            has_wiki: false,
            allow_merge_commit: true,
            allow_squash_merge: true,
            allow_rebase_merge: true,
            has_downloads: false,
            auto_init: false,
            default_branch: None,
            license_template: String::new(),
            gitignore_template: String::new(),
        }
    }

    /// Check the fields the hosting API cannot be asked to repair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is empty or contains a `/`.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(
                "repository name cannot be empty".to_string(),
            ));
        }
        if self.name.contains('/') {
            return Err(Error::Validation(format!(
                "repository name '{}' must not contain '/'",
                self.name
            )));
        }
        Ok(())
    }

    /// The default branch if it is explicitly set. Empty counts as unset.
    #[must_use]
    pub fn explicit_default_branch(&self) -> Option<&str> {
        self.default_branch
            .as_deref()
            .filter(|branch| !branch.is_empty())
    }

    /// Whether moving from `self` to `next` needs destroy-then-create.
    ///
    /// Repository names are case-insensitive on the hosting side, so a
    /// change in casing alone is applied in place.
    #[must_use]
    pub fn requires_replacement(&self, next: &Self) -> bool {
        !self.name.eq_ignore_ascii_case(&next.name)
    }
}

/// Fields only the hosting API can fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedAttributes {
    /// `owner/name`.
    pub full_name: String,
    /// SSH clone URL.
    pub ssh_clone_url: String,
    /// Subversion checkout URL.
    pub svn_url: String,
    /// `git://` clone URL.
    pub git_clone_url: String,
    /// HTTPS clone URL.
    pub http_clone_url: String,
}

/// Local record of one managed repository.
///
/// `id` is the repository name; it is `None` while the repository is absent
/// (not yet created, deleted, or found missing by a read).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryResource {
    /// Identifier, equal to the remote repository name.
    pub id: Option<String>,
    /// Declared fields, overwritten by reads.
    #[serde(flatten)]
    pub desired: DesiredState,
    /// Fields computed by the hosting API.
    #[serde(flatten)]
    pub computed: ComputedAttributes,
}

impl RepositoryResource {
    /// A record that has not been created yet.
    #[must_use]
    pub fn new(desired: DesiredState) -> Self {
        Self {
            id: None,
            desired,
            computed: ComputedAttributes::default(),
        }
    }

    /// A record seeded from an external identifier, ready to be read.
    #[must_use]
    pub fn seeded(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            desired: DesiredState::new(id.clone()),
            id: Some(id),
            computed: ComputedAttributes::default(),
        }
    }

    /// The identifier, if the repository is present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether the record refers to an existing remote repository.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.id.is_some()
    }

    /// Overwrite the record with what the API returned for `id`.
    ///
    /// `auto_init` and the two templates only matter at creation and are
    /// never returned, so they keep their local values.
    pub(crate) fn refresh_from(&mut self, id: &str, repo: Repository) {
        let desired = &mut self.desired;
        desired.name = id.to_string();
        desired.description = repo.description.unwrap_or_default();
        desired.homepage_url = repo.homepage.unwrap_or_default();
        desired.private = repo.private.unwrap_or_default();
        desired.has_issues = repo.has_issues.unwrap_or_default();
        desired.has_wiki = repo.has_wiki.unwrap_or_default();
        desired.allow_merge_commit = repo.allow_merge_commit.unwrap_or_default();
        desired.allow_squash_merge = repo.allow_squash_merge.unwrap_or_default();
        desired.allow_rebase_merge = repo.allow_rebase_merge.unwrap_or_default();
        desired.has_downloads = repo.has_downloads.unwrap_or_default();
        desired.default_branch = repo.default_branch.filter(|branch| !branch.is_empty());

        self.computed = ComputedAttributes {
            full_name: repo.full_name.unwrap_or_default(),
            ssh_clone_url: repo.ssh_url.unwrap_or_default(),
            svn_url: repo.svn_url.unwrap_or_default(),
            git_clone_url: repo.git_url.unwrap_or_default(),
            http_clone_url: repo.clone_url.unwrap_or_default(),
        };
        self.id = Some(id.to_string());
    }
}
