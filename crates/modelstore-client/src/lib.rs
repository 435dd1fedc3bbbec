//! modelstore-client: Client for the model storage service
//!
//! This crate provides:
//! - `ModelStorageClient` with lookup, list and upload
//! - The `Transport` contract the client sends requests through
//! - A reqwest-backed `HttpTransport`

pub mod client;
pub mod http;
pub mod transport;

pub use client::ModelStorageClient;
pub use http::HttpTransport;
pub use transport::{
    CredentialsMode, Method, ModelPayload, PayloadStream, Request, Transport, TransportResponse,
};
