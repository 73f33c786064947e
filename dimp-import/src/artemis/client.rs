//! Signed HTTP client for the Artemis gateway

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::payloads::{FaceAddition, PersonRegistration, ServiceResponse};
use super::signer::{Signer, ACCEPT, CONTENT_TYPE_JSON};
use super::{ArtemisError, IdentityService};
use crate::config::ArtemisConfig;

pub const PERSON_ADD_PATH: &str = "/artemis/api/resource/v1/person/single/add";
pub const FACE_ADD_PATH: &str = "/artemis/api/frs/v1/face/single/addition";

/// HTTP methods the gateway is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Artemis API client
pub struct ArtemisClient {
    http_client: reqwest::Client,
    base_url: String,
    signer: Signer,
}

impl ArtemisClient {
    pub fn new(config: &ArtemisConfig) -> Result<Self, ArtemisError> {
        let mut builder = reqwest::Client::builder();

        if config.accept_invalid_certs {
            warn!(
                base_url = %config.base_url,
                "TLS certificate validation is DISABLED for the Artemis gateway"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| ArtemisError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            signer: Signer::new(config.app_key.clone(), &config.app_secret)?,
        })
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Issue a signed call and unwrap the service envelope
    ///
    /// POST sends `payload` (or `{}`) as JSON; GET sends no body. The
    /// envelope `code` decides success regardless of the HTTP status.
    pub async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<ServiceResponse, ArtemisError> {
        let url = format!("{}{}", self.base_url, path);
        let signature = self.signer.sign(method.as_str(), CONTENT_TYPE_JSON, path);

        let request = match method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => {
                let body = match payload {
                    Some(value) => serde_json::to_vec(value),
                    None => serde_json::to_vec(&serde_json::json!({})),
                }
                .map_err(|e| ArtemisError::Transport(format!("Failed to serialize request: {}", e)))?;
                self.http_client.post(&url).body(body)
            }
        };

        debug!(method = method.as_str(), path, "Calling Artemis");

        let response = request
            .header("Accept", ACCEPT)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-ca-key", self.signer.app_key())
            .header("x-ca-signature", signature)
            .header("x-ca-signature-headers", "x-ca-key")
            .send()
            .await
            .map_err(|e| ArtemisError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ArtemisError::Transport(e.to_string()))?;

        let envelope: ServiceResponse = serde_json::from_str(&body).map_err(|e| {
            ArtemisError::Transport(format!("HTTP {}: malformed response: {}", status.as_u16(), e))
        })?;

        if !envelope.is_success() {
            return Err(ArtemisError::Service {
                code: envelope.code,
                message: envelope.msg.unwrap_or_default(),
            });
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), path, "Artemis reported success with non-2xx HTTP status");
        }

        Ok(envelope)
    }

    async fn post<T: serde::Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<ServiceResponse, ArtemisError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ArtemisError::Transport(format!("Failed to serialize request: {}", e)))?;
        self.call(HttpMethod::Post, path, Some(&body)).await
    }
}

#[async_trait]
impl IdentityService for ArtemisClient {
    async fn register_person(&self, person: &PersonRegistration) -> Result<String, ArtemisError> {
        let response = self.post(PERSON_ADD_PATH, person).await?;

        response.data_as_id().ok_or_else(|| {
            ArtemisError::Transport("person registration succeeded without a person id".to_string())
        })
    }

    async fn add_face(&self, face: &FaceAddition) -> Result<(), ArtemisError> {
        self.post(FACE_ADD_PATH, face).await?;
        Ok(())
    }
}
