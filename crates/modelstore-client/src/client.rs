//! Model storage client

use crate::http::HttpTransport;
use crate::transport::{CredentialsMode, ModelPayload, Request, Transport, TransportResponse};
use modelstore_core::{
    ClientConfig, ModelId, ModelRecord, ModelStoreError, ModelStoreResult, RequestError,
};
use tracing::debug;

/// Path segment the storage service is mounted under
pub const STORAGE_PATH: &str = "modelstorage/";

/// Client for the model storage service.
///
/// Holds nothing but the base URL and a transport; every operation is a
/// single request and calls are independent of each other.
#[derive(Clone)]
pub struct ModelStorageClient<T = HttpTransport> {
    /// `<root>/modelstorage/`
    base_url: String,
    transport: T,
}

impl ModelStorageClient<HttpTransport> {
    /// Build a client over HTTP from configuration
    pub fn from_config(config: &ClientConfig) -> ModelStoreResult<Self> {
        reqwest::Url::parse(&config.storage.root).map_err(|e| {
            ModelStoreError::Config(format!("Invalid root URL '{}': {}", config.storage.root, e))
        })?;
        let transport = HttpTransport::new(&config.http, config.credentials.clone())?;
        Ok(Self::new(&config.storage.root, transport))
    }
}

impl<T: Transport> ModelStorageClient<T> {
    /// Create a client for the service under `root`
    pub fn new(root: &str, transport: T) -> Self {
        Self {
            base_url: format!("{}/{}", root.trim_end_matches('/'), STORAGE_PATH),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a model ID and return its file name
    pub async fn lookup(&self, model_id: ModelId) -> ModelStoreResult<String> {
        let url = format!("{}lookup/{}", self.base_url, model_id);
        debug!(model_id, "Looking up model");

        let body = self.fetch(Request::get(url)).await?;
        let filename: String = serde_json::from_slice(&body)?;
        Ok(filename)
    }

    /// List all models as `(id, filename)` pairs in server order
    pub async fn list(&self) -> ModelStoreResult<Vec<(ModelId, String)>> {
        let records = self.list_records().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// List all models as records in server order
    pub async fn list_records(&self) -> ModelStoreResult<Vec<ModelRecord>> {
        debug!("Listing models");

        let body = self.fetch(Request::get(self.base_url.clone())).await?;
        let records: Vec<ModelRecord> = serde_json::from_slice(&body)?;
        Ok(records)
    }

    /// Upload a model under the given file name.
    ///
    /// Sent with credentials included. The response body is ignored.
    pub async fn upload(
        &self,
        name: &str,
        data: impl Into<ModelPayload>,
    ) -> ModelStoreResult<()> {
        let url = format!("{}upload/{}", self.base_url, name);
        let data = data.into();
        debug!(name, payload = ?data, "Uploading model");

        let request = Request::put(url, data).with_credentials(CredentialsMode::Include);
        self.fetch(request).await?;
        Ok(())
    }

    async fn fetch(&self, request: Request) -> ModelStoreResult<Vec<u8>> {
        match self.transport.send(request).await? {
            TransportResponse::Success { body, .. } => Ok(body),
            TransportResponse::Failure { status, message } => {
                Err(RequestError::Status { status, message }.into())
            }
        }
    }
}
