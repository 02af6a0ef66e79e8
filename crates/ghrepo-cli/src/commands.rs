//! Subcommand execution.
//!
//! The CLI keeps no state between runs: every command builds its record
//! from the manifest or the given name, runs one reconciler operation and
//! prints the resulting record as JSON on stdout. A `read` of a repository
//! that no longer exists prints a notice instead.

use std::path::Path;

use anyhow::{Context, Result};
use ghrepo_core::config::load_manifest;
use ghrepo_core::{DesiredState, Organization, RepositoryResource, resource};
use tokio_util::sync::CancellationToken;

use crate::args::Command;

/// Run one command against `org`.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or the operation fails.
pub async fn run(org: &Organization, command: Command, cancel: &CancellationToken) -> Result<()> {
    match command {
        Command::Create { manifest } => {
            let mut repo = RepositoryResource::new(manifest_state(&manifest)?);
            resource::create(org, &mut repo, cancel)
                .await
                .with_context(|| format!("failed to create repository {}", repo.desired.name))?;
            print_record(&repo)
        }
        Command::Read { name } => {
            let mut repo = RepositoryResource::seeded(name.as_str());
            resource::read(org, &mut repo, cancel)
                .await
                .with_context(|| format!("failed to read repository {name}"))?;
            if repo.is_present() {
                print_record(&repo)
            } else {
                tracing::warn!("github repository {}/{} is gone", org.name(), name);
                println!("repository {}/{name} no longer exists", org.name());
                Ok(())
            }
        }
        Command::Update { manifest, id } => {
            let desired = manifest_state(&manifest)?;
            let id = id.unwrap_or_else(|| desired.name.clone());
            let mut repo = RepositoryResource::seeded(id.as_str());
            resource::update(org, &mut repo, desired, cancel)
                .await
                .with_context(|| format!("failed to update repository {id}"))?;
            print_record(&repo)
        }
        Command::Delete { name } => {
            let mut repo = RepositoryResource::seeded(name.as_str());
            resource::delete(org, &mut repo, cancel)
                .await
                .with_context(|| format!("failed to delete repository {name}"))?;
            tracing::info!("deleted github repository {}/{}", org.name(), name);
            Ok(())
        }
        Command::Import { name } => {
            let repo = resource::import(org, &name, cancel)
                .await
                .with_context(|| format!("failed to import repository {name}"))?;
            print_record(&repo)
        }
    }
}

fn manifest_state(path: &Path) -> Result<DesiredState> {
    load_manifest(path).with_context(|| format!("failed to load manifest {}", path.display()))
}

fn print_record(repo: &RepositoryResource) -> Result<()> {
    let rendered = serde_json::to_string_pretty(repo).context("failed to render record")?;
    println!("{rendered}");
    Ok(())
}
