//! Wire types for the repository endpoints of the hosting API.

use serde::{Deserialize, Serialize};

/// Repository entity as returned by the hosting API.
///
/// The API omits some fields depending on the caller's permissions
/// (the merge flags are only returned to admins), so everything except
/// the name is optional and read back as its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,
    /// `owner/name`.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Project homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Whether the repository is private.
    #[serde(default)]
    pub private: Option<bool>,
    /// Whether issues are enabled.
    #[serde(default)]
    pub has_issues: Option<bool>,
    /// Whether the wiki is enabled.
    #[serde(default)]
    pub has_wiki: Option<bool>,
    /// Whether merge commits are allowed on pull requests.
    #[serde(default)]
    pub allow_merge_commit: Option<bool>,
    /// Whether squash merges are allowed on pull requests.
    #[serde(default)]
    pub allow_squash_merge: Option<bool>,
    /// Whether rebase merges are allowed on pull requests.
    #[serde(default)]
    pub allow_rebase_merge: Option<bool>,
    /// Whether downloads are enabled.
    #[serde(default)]
    pub has_downloads: Option<bool>,
    /// Current default branch. Absent on some empty repositories.
    #[serde(default)]
    pub default_branch: Option<String>,
    /// SSH clone URL.
    #[serde(default)]
    pub ssh_url: Option<String>,
    /// Subversion checkout URL.
    #[serde(default)]
    pub svn_url: Option<String>,
    /// `git://` clone URL.
    #[serde(default)]
    pub git_url: Option<String>,
    /// HTTPS clone URL.
    #[serde(default)]
    pub clone_url: Option<String>,
}

/// Request payload for the create and edit endpoints.
///
/// Every field is always sent, empty strings and `false` included.
/// `default_branch` is the one exception: it is only valid on edit and is
/// omitted from the payload unless explicitly set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRequest {
    /// Repository name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Project homepage URL.
    pub homepage: String,
    /// Whether the repository is private.
    pub private: bool,
    /// Whether issues are enabled.
    pub has_issues: bool,
    /// Whether the wiki is enabled.
    pub has_wiki: bool,
    /// Whether merge commits are allowed.
    pub allow_merge_commit: bool,
    /// Whether squash merges are allowed.
    pub allow_squash_merge: bool,
    /// Whether rebase merges are allowed.
    pub allow_rebase_merge: bool,
    /// Whether downloads are enabled.
    pub has_downloads: bool,
    /// Create an initial commit with an empty README.
    pub auto_init: bool,
    /// License template keyword, e.g. `mit`.
    pub license_template: String,
    /// Gitignore template name, e.g. `Rust`.
    pub gitignore_template: String,
    /// Branch to make the default. Edit only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

/// Error body returned by the hosting API on failure.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
