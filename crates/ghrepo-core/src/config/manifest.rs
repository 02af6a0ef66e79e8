//! Desired-state manifests.
//!
//! A manifest is a TOML file declaring one repository, using the same field
//! names as [`DesiredState`]:
//!
//! ```toml
//! name = "demo"
//! description = "Demo repository"
//! private = true
//! allow_rebase_merge = false
//! ```

use std::path::Path;

use crate::error::{Error, Result};
use crate::resource::DesiredState;

/// Load and validate a manifest.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or declares
/// an invalid repository name.
pub fn load_manifest(path: &Path) -> Result<DesiredState> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Config(format!("manifest not found: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;

    let desired: DesiredState = toml::from_str(&content)?;
    desired.validate()?;
    Ok(desired)
}
