//! HikCentral Artemis OpenAPI integration
//!
//! - [`signer`]: `x-ca-signature` computation
//! - [`client`]: signed HTTP calls and envelope handling
//! - [`payloads`]: request/response bodies
//!
//! The record processor talks to the service through [`IdentityService`],
//! so tests can swap the HTTP client for an in-memory fake.

pub mod client;
pub mod payloads;
pub mod signer;

pub use client::{ArtemisClient, HttpMethod};
pub use payloads::{FaceAddition, PersonRegistration, ServiceResponse};
pub use signer::Signer;

use async_trait::async_trait;
use thiserror::Error;

/// Artemis client errors
#[derive(Debug, Clone, Error)]
pub enum ArtemisError {
    /// Network failure or a response that is not a service envelope
    #[error("Transport error: {0}")]
    Transport(String),

    /// Envelope code other than "0"
    #[error("Service error {code}: {message}")]
    Service { code: String, message: String },
}

/// Person/face registration operations used by the importer
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Register a person, returning the service's person id
    async fn register_person(&self, person: &PersonRegistration) -> Result<String, ArtemisError>;

    /// Attach a face to a registered person
    async fn add_face(&self, face: &FaceAddition) -> Result<(), ArtemisError>;
}
