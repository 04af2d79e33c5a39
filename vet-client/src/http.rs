//! HTTP client for the records backend
//!
//! `HttpClient` is the seam between the forms and the network: the
//! reqwest-backed [`NetworkHttpClient`] talks to the real backend, tests
//! substitute a recording double.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `path` and decode the JSON body
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;

    /// POST a JSON body; any 2xx counts as success and the body is ignored
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()>;

    /// PUT a JSON body; any 2xx counts as success and the body is ignored
    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Turn non-2xx responses into `ClientError::Api`, reading `{message}` when present
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = ErrorBody::message_from(&text);
        tracing::warn!(status = status.as_u16(), message = ?message, "request rejected by server");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = Self::check_status(self.client.get(&url).send().await?).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        Self::check_status(self.client.post(&url).json(body).send().await?).await?;
        Ok(())
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        Self::check_status(self.client.put(&url).json(body).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/clientes"), "http://localhost:8000/clientes");
        assert_eq!(client.url("mascotas"), "http://localhost:8000/mascotas");
    }
}
