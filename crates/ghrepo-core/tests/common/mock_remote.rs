#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use ghrepo_core::error::{Error, Result};
use ghrepo_core::remote::{Repository, RepositoryClient, RepositoryRequest};

/// Remote operation kinds recorded by the mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Get,
    Edit,
    Delete,
}

/// A single call received by the mock.
#[derive(Debug, Clone)]
pub struct RemoteCall {
    pub op: Op,
    pub owner: String,
    pub name: String,
    pub request: Option<RepositoryRequest>,
}

/// In-memory stand-in for the hosting API.
///
/// Repositories are keyed by lowercased name, like the real service.
/// Every call is recorded; failures can be queued per operation and are
/// consumed by the next matching call.
#[derive(Debug, Default)]
pub struct MockRemote {
    repos: Mutex<HashMap<String, Repository>>,
    calls: Mutex<Vec<RemoteCall>>,
    failures: Mutex<HashMap<Op, (u16, String)>>,
    delay: Mutex<Option<Duration>>,
}

impl MockRemote {
    /// Creates an empty mock remote.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a repository as if it had been created out of band.
    pub fn insert(&self, owner: &str, name: &str) {
        let repo = Self::entity(owner, &RepositoryRequest {
            name: name.to_string(),
            description: String::new(),
            homepage: String::new(),
            private: false,
            has_issues: true,
            has_wiki: true,
            allow_merge_commit: true,
            allow_squash_merge: true,
            allow_rebase_merge: true,
            has_downloads: true,
            auto_init: true,
            license_template: String::new(),
            gitignore_template: String::new(),
            default_branch: None,
        });
        self.repos.lock().unwrap().insert(name.to_lowercase(), repo);
    }

    /// Deletes a repository behind the reconciler's back.
    pub fn remove(&self, name: &str) {
        self.repos.lock().unwrap().remove(&name.to_lowercase());
    }

    /// Returns the stored entity for `name`.
    pub fn stored(&self, name: &str) -> Option<Repository> {
        self.repos.lock().unwrap().get(&name.to_lowercase()).cloned()
    }

    /// Makes the next call of `op` fail with `status`.
    pub fn fail_next(&self, op: Op, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(op, (status, message.to_string()));
    }

    /// Delays every call by `delay` before answering.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls of a given kind received so far.
    pub fn calls_of(&self, op: Op) -> Vec<RemoteCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.op == op)
            .collect()
    }

    fn entity(owner: &str, request: &RepositoryRequest) -> Repository {
        let name = &request.name;
        Repository {
            name: name.clone(),
            full_name: Some(format!("{owner}/{name}")),
            description: Some(request.description.clone()),
            homepage: Some(request.homepage.clone()),
            private: Some(request.private),
            has_issues: Some(request.has_issues),
            has_wiki: Some(request.has_wiki),
            allow_merge_commit: Some(request.allow_merge_commit),
            allow_squash_merge: Some(request.allow_squash_merge),
            allow_rebase_merge: Some(request.allow_rebase_merge),
            has_downloads: Some(request.has_downloads),
            default_branch: request.auto_init.then(|| "main".to_string()),
            ssh_url: Some(format!("git@github.com:{owner}/{name}.git")),
            svn_url: Some(format!("https://github.com/{owner}/{name}")),
            git_url: Some(format!("git://github.com/{owner}/{name}.git")),
            clone_url: Some(format!("https://github.com/{owner}/{name}.git")),
        }
    }

    async fn record(
        &self,
        op: Op,
        owner: &str,
        name: &str,
        request: Option<&RepositoryRequest>,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(RemoteCall {
            op,
            owner: owner.to_string(),
            name: name.to_string(),
            request: request.cloned(),
        });

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.failures.lock().unwrap().remove(&op) {
            Some((status, message)) => Err(Error::Remote {
                status: Some(status),
                message,
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> Error {
        Error::Remote {
            status: Some(404),
            message: "Not Found".to_string(),
        }
    }
}

#[async_trait]
impl RepositoryClient for MockRemote {
    async fn create(&self, owner: &str, request: &RepositoryRequest) -> Result<Repository> {
        self.record(Op::Create, owner, &request.name, Some(request))
            .await?;

        let key = request.name.to_lowercase();
        let mut repos = self.repos.lock().unwrap();
        if repos.contains_key(&key) {
            return Err(Error::Remote {
                status: Some(422),
                message: "name already exists on this account".to_string(),
            });
        }
        let repo = Self::entity(owner, request);
        repos.insert(key, repo.clone());
        Ok(repo)
    }

    async fn get(&self, owner: &str, name: &str) -> Result<Repository> {
        self.record(Op::Get, owner, name, None).await?;
        self.stored(name).ok_or_else(Self::not_found)
    }

    async fn edit(
        &self,
        owner: &str,
        name: &str,
        request: &RepositoryRequest,
    ) -> Result<Repository> {
        self.record(Op::Edit, owner, name, Some(request)).await?;

        let mut repos = self.repos.lock().unwrap();
        let current = repos
            .remove(&name.to_lowercase())
            .ok_or_else(Self::not_found)?;

        let mut repo = Self::entity(owner, request);
        repo.default_branch = request
            .default_branch
            .clone()
            .or(current.default_branch);
        repos.insert(request.name.to_lowercase(), repo.clone());
        Ok(repo)
    }

    async fn delete(&self, owner: &str, name: &str) -> Result<()> {
        self.record(Op::Delete, owner, name, None).await?;
        self.repos
            .lock()
            .unwrap()
            .remove(&name.to_lowercase())
            .map(|_| ())
            .ok_or_else(Self::not_found)
    }
}
