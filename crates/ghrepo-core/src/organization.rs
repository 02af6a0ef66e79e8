//! Organization context passed to every reconciler call.

use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::remote::{HttpRepositoryClient, RepositoryClient};

/// The owning organization and a client bound to it.
///
/// Cheap to clone; clones share the same client.
#[derive(Clone)]
pub struct Organization {
    name: String,
    client: Arc<dyn RepositoryClient>,
}

impl std::fmt::Debug for Organization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Organization")
            .field("name", &self.name)
            .field("client", &"<client>")
            .finish()
    }
}

impl Organization {
    /// Bind `client` to the organization `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, client: Arc<dyn RepositoryClient>) -> Self {
        Self {
            name: name.into(),
            client,
        }
    }

    /// Build the context from provider configuration, using the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let client = HttpRepositoryClient::new(&config.api)?;
        Ok(Self::new(config.organization.name.clone(), Arc::new(client)))
    }

    /// Organization login.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Client bound to this organization.
    #[must_use]
    pub fn client(&self) -> &dyn RepositoryClient {
        self.client.as_ref()
    }
}
