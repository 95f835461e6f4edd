//! Typed client for the OmniDimension agent API
//!
//! A thin HTTPS client: every method issues one request, checks the
//! status, and decodes the JSON body. No retries, no backoff, no
//! timeouts beyond reqwest's own defaults. Service failures surface
//! as [`ApiError`] with the service's response intact.

use reqwest::Method;
use serde_json::Value;

use crate::agent::AgentDefinition;
use crate::client::error::ApiError;
use crate::client::models::{AgentPage, CreatedAgent};

/// Default API base for the hosted platform
pub const DEFAULT_BASE_URL: &str = "https://backend.omnidim.io/api/v1";

/// Client for the platform's agent endpoints
#[derive(Debug, Clone)]
pub struct OmnidimClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmnidimClient {
    /// Create a client against the hosted platform
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different API base
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Submit an agent definition to the platform, unmodified.
    ///
    /// The payload is not validated here; the service's own error
    /// taxonomy is authoritative and comes back verbatim in
    /// [`ApiError::Status`].
    pub async fn create_agent(
        &self,
        definition: &AgentDefinition,
    ) -> Result<CreatedAgent, ApiError> {
        let url = self.url("agents/create");
        tracing::debug!(%url, name = %definition.name, "creating agent");

        let response = self
            .request(Method::POST, &url)
            .json(definition)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let response = check_status(response, &url).await?;
        response.json().await.map_err(|e| ApiError::decode(&url, e))
    }

    /// List agents registered on the platform
    pub async fn list_agents(&self, page: u32, page_size: u32) -> Result<AgentPage, ApiError> {
        let url = self.url("agents");
        tracing::debug!(%url, page, page_size, "listing agents");

        let response = self
            .request(Method::GET, &url)
            .query(&[("pageno", page), ("pagesize", page_size)])
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let response = check_status(response, &url).await?;
        response.json().await.map_err(|e| ApiError::decode(&url, e))
    }

    /// Fetch one agent's stored configuration.
    ///
    /// The shape of the echo is the service's contract, so the value
    /// stays opaque JSON.
    pub async fn get_agent(&self, id: u64) -> Result<Value, ApiError> {
        let url = self.url(&format!("agents/{}", id));
        tracing::debug!(%url, "fetching agent");

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let response = check_status(response, &url).await?;
        response.json().await.map_err(|e| ApiError::decode(&url, e))
    }

    /// Delete an agent from the platform
    pub async fn delete_agent(&self, id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("agents/{}", id));
        tracing::debug!(%url, "deleting agent");

        let response = self
            .request(Method::DELETE, &url)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        check_status(response, &url).await?;
        Ok(())
    }
}

/// Pass successful responses through; turn anything else into a status
/// error carrying the raw body.
async fn check_status(
    response: reqwest::Response,
    url: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            url: url.to_string(),
            status,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = OmnidimClient::new("key");
        assert_eq!(
            client.url("agents/create"),
            "https://backend.omnidim.io/api/v1/agents/create"
        );
    }

    #[test]
    fn test_custom_base_url() {
        let client = OmnidimClient::new("key").with_base_url("http://localhost:8080/api/v1");
        assert_eq!(client.url("agents"), "http://localhost:8080/api/v1/agents");
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let client = OmnidimClient::new("key").with_base_url("http://localhost:8080/api/v1/");
        assert_eq!(
            client.url("agents/42"),
            "http://localhost:8080/api/v1/agents/42"
        );
    }
}
