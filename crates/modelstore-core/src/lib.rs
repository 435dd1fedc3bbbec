//! modelstore-core: Core types for the model storage client
//!
//! This crate provides the types shared by the client library and the CLI:
//! - Model records
//! - Configuration types
//! - Error handling

pub mod config;
pub mod error;
pub mod model;

pub use config::*;
pub use error::*;
pub use model::*;
