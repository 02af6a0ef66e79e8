//! HTTP implementation of [`RepositoryClient`] for the GitHub REST API.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use tracing::trace;
use url::Url;

use super::client::RepositoryClient;
use super::types::{ApiErrorBody, Repository, RepositoryRequest};
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Media type requested from the API.
const MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned on every request.
const API_VERSION: &str = "2022-11-28";

/// Repository client talking to the hosting API over HTTPS.
///
/// Timeouts are configured once on the underlying `reqwest` client; the
/// reconciler imposes none of its own.
#[derive(Debug, Clone)]
pub struct HttpRepositoryClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpRepositoryClient {
    /// Build a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidConfig(format!("API base URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        trace!(%method, %url, "preparing API request");
        let builder = self
            .http
            .request(method, url)
            .header(ACCEPT, MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION);

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and turn non-success statuses into [`Error::Remote`].
    async fn send(builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                trace!(%status, error = %err, "failed to read error response body");
                String::new()
            }
        };
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.message,
            Err(_) if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => body,
        };

        Err(Error::Remote {
            status: Some(status.as_u16()),
            message,
        })
    }

    /// Decode a successful response body as a repository entity.
    async fn decode(response: Response) -> Result<Repository> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RepositoryClient for HttpRepositoryClient {
    async fn create(&self, owner: &str, request: &RepositoryRequest) -> Result<Repository> {
        let url = self.endpoint(&["orgs", owner, "repos"])?;
        let response = Self::send(self.request(Method::POST, url).json(request)).await?;
        Self::decode(response).await
    }

    async fn get(&self, owner: &str, name: &str) -> Result<Repository> {
        let url = self.endpoint(&["repos", owner, name])?;
        let response = Self::send(self.request(Method::GET, url)).await?;
        Self::decode(response).await
    }

    async fn edit(
        &self,
        owner: &str,
        name: &str,
        request: &RepositoryRequest,
    ) -> Result<Repository> {
        let url = self.endpoint(&["repos", owner, name])?;
        let response = Self::send(self.request(Method::PATCH, url).json(request)).await?;
        Self::decode(response).await
    }

    async fn delete(&self, owner: &str, name: &str) -> Result<()> {
        let url = self.endpoint(&["repos", owner, name])?;
        Self::send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}
