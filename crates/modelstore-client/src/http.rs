//! reqwest-backed transport

use crate::transport::{
    CredentialsMode, Method, ModelPayload, Request, Transport, TransportResponse,
};
use async_trait::async_trait;
use modelstore_core::{CredentialsConfig, HttpConfig, ModelStoreError, ModelStoreResult, RequestError};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// HTTP transport for the storage service
#[derive(Clone)]
pub struct HttpTransport {
    /// HTTP client, owns the connection pool
    client: reqwest::Client,
    /// Credentials for requests that include them
    credentials: CredentialsConfig,
}

impl HttpTransport {
    /// Create a new transport from configuration
    pub fn new(http: &HttpConfig, credentials: CredentialsConfig) -> ModelStoreResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(http.user_agent.as_str());
        if http.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(http.timeout_secs));
        }
        if http.connect_timeout_secs > 0 {
            builder = builder.connect_timeout(Duration::from_secs(http.connect_timeout_secs));
        }
        let client = builder.build().map_err(|e| {
            ModelStoreError::Config(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self::with_client(client, credentials))
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: reqwest::Client, credentials: CredentialsConfig) -> Self {
        Self {
            client,
            credentials,
        }
    }

    fn attach_credentials(&self, mut builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.credentials.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(cookie) = &self.credentials.cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        builder
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new(), CredentialsConfig::default())
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("has_credentials", &!self.credentials.is_empty())
            .finish()
    }
}

fn payload_body(payload: ModelPayload) -> reqwest::Body {
    match payload {
        ModelPayload::Bytes(bytes) => reqwest::Body::from(bytes),
        ModelPayload::Stream(stream) => reqwest::Body::wrap_stream(stream),
        ModelPayload::File(file) => reqwest::Body::from(file),
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<TransportResponse, RequestError> {
        let Request {
            method,
            url,
            credentials,
            body,
        } = request;

        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Put => self.client.put(&url),
        };
        if credentials == CredentialsMode::Include {
            builder = self.attach_credentials(builder);
        }
        if let Some(body) = body {
            builder = builder.body(payload_body(body));
        }

        let response = builder.send().await.map_err(|e| {
            debug!(method = %method, url = %url, error = %e, "Request failed to complete");
            RequestError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(method = %method, url = %url, status = %status, "Request finished");

        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;
            Ok(TransportResponse::Success {
                status: status.as_u16(),
                body: body.to_vec(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            Ok(TransportResponse::Failure {
                status: status.as_u16(),
                message,
            })
        }
    }
}
