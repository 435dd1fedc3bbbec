//! Request-sending contract between the client and the HTTP layer

use async_trait::async_trait;
use futures::Stream;
use modelstore_core::RequestError;
use std::fmt;
use std::io;
use std::pin::Pin;

/// Streaming byte source accepted as an upload body
pub type PayloadStream = Pin<Box<dyn Stream<Item = io::Result<Vec<u8>>> + Send + Sync>>;

/// HTTP method used by the storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Put => write!(f, "PUT"),
        }
    }
}

/// Whether configured credentials ride along on a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialsMode {
    /// Transport default, nothing attached
    #[default]
    Default,
    /// Attach configured credentials
    Include,
}

/// Binary model payload for uploads
pub enum ModelPayload {
    /// Fixed byte buffer
    Bytes(Vec<u8>),
    /// Streaming byte source
    Stream(PayloadStream),
    /// Opaque blob backed by an open file
    File(tokio::fs::File),
}

impl ModelPayload {
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Vec<u8>>> + Send + Sync + 'static,
    {
        ModelPayload::Stream(Box::pin(stream))
    }

    /// Drain the payload into memory
    #[cfg(test)]
    pub(crate) async fn into_bytes(self) -> io::Result<Vec<u8>> {
        use futures::TryStreamExt;
        use tokio::io::AsyncReadExt;

        match self {
            ModelPayload::Bytes(bytes) => Ok(bytes),
            ModelPayload::Stream(stream) => stream.try_concat().await,
            ModelPayload::File(mut file) => {
                let mut buf = Vec::new();
                file.read_to_end(&mut buf).await?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Debug for ModelPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelPayload::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
            ModelPayload::Stream(_) => write!(f, "Stream"),
            ModelPayload::File(_) => write!(f, "File"),
        }
    }
}

impl From<Vec<u8>> for ModelPayload {
    fn from(bytes: Vec<u8>) -> Self {
        ModelPayload::Bytes(bytes)
    }
}

impl From<&[u8]> for ModelPayload {
    fn from(bytes: &[u8]) -> Self {
        ModelPayload::Bytes(bytes.to_vec())
    }
}

impl From<tokio::fs::File> for ModelPayload {
    fn from(file: tokio::fs::File) -> Self {
        ModelPayload::File(file)
    }
}

/// A single request handed to the transport
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub credentials: CredentialsMode,
    pub body: Option<ModelPayload>,
}

impl Request {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            credentials: CredentialsMode::Default,
            body: None,
        }
    }

    pub fn put(url: String, body: ModelPayload) -> Self {
        Self {
            method: Method::Put,
            url,
            credentials: CredentialsMode::Default,
            body: Some(body),
        }
    }

    pub fn with_credentials(mut self, credentials: CredentialsMode) -> Self {
        self.credentials = credentials;
        self
    }
}

/// Outcome of an exchange the server answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResponse {
    /// 2xx status with the raw response body
    Success { status: u16, body: Vec<u8> },
    /// Any other status
    Failure { status: u16, message: String },
}

/// Sends one HTTP request and reports how the server answered.
///
/// Connectivity problems are returned as `Err(RequestError::Transport)`.
/// A non-success status is not an error at this layer; it comes back as
/// [`TransportResponse::Failure`] and the client decides what it means.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<TransportResponse, RequestError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: Request) -> Result<TransportResponse, RequestError> {
        (**self).send(request).await
    }
}
