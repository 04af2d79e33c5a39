//! Typed access to the record endpoints

use crate::http::{HttpClient, NetworkHttpClient};
use crate::resource::Resource;
use crate::{ClientConfig, ClientResult, Endpoints};
use shared::ListResponse;

/// A write the form decided to send
#[derive(Debug, Clone)]
pub enum WriteCommand<R: Resource> {
    /// POST, payload without identifier
    Create(R::Create),
    /// PUT, payload carrying the selection's identifier
    Update(R::Update),
}

/// Records API on top of an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct VetApi<H = NetworkHttpClient> {
    http: H,
    endpoints: Endpoints,
}

impl VetApi<NetworkHttpClient> {
    /// Build a network-backed API from configuration
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config)?;
        tracing::info!(base_url = http.base_url(), "records API client ready");
        Ok(Self::with_http(http, config.endpoints.clone()))
    }
}

impl<H: HttpClient> VetApi<H> {
    pub fn with_http(http: H, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the full collection of `R`
    pub async fn list<R: Resource>(&self) -> ClientResult<Vec<R>> {
        let response: ListResponse<R> = self.http.get(R::list_path(&self.endpoints)).await?;
        Ok(response.data)
    }

    pub async fn create<R: Resource>(&self, payload: &R::Create) -> ClientResult<()> {
        self.http.post(R::write_path(&self.endpoints), payload).await
    }

    pub async fn update<R: Resource>(&self, payload: &R::Update) -> ClientResult<()> {
        self.http.put(R::write_path(&self.endpoints), payload).await
    }

    pub async fn execute<R: Resource>(&self, command: &WriteCommand<R>) -> ClientResult<()> {
        match command {
            WriteCommand::Create(payload) => self.create::<R>(payload).await,
            WriteCommand::Update(payload) => self.update::<R>(payload).await,
        }
    }
}
