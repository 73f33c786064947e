//! Artemis request signing
//!
//! The gateway authenticates each call with an HMAC-SHA256 over a canonical
//! string built from the method, the `Accept` and `Content-Type` headers,
//! the signed `x-ca-key` header and the request path:
//!
//! ```text
//! POST
//! application/json, text/plain, */*
//! application/json
//! x-ca-key:<app key>
//! /artemis/api/resource/v1/person/single/add
//! ```
//!
//! The digest is sent base64-encoded in `x-ca-signature`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::ArtemisError;

/// `Accept` header value, part of the signed string
pub const ACCEPT: &str = "application/json, text/plain, */*";

/// `Content-Type` used for every call
pub const CONTENT_TYPE_JSON: &str = "application/json";

type HmacSha256 = Hmac<Sha256>;

/// Computes `x-ca-signature` values for one app key/secret pair
#[derive(Clone)]
pub struct Signer {
    app_key: String,
    mac: HmacSha256,
}

impl Signer {
    pub fn new(app_key: impl Into<String>, app_secret: &str) -> Result<Self, ArtemisError> {
        let mac = HmacSha256::new_from_slice(app_secret.as_bytes())
            .map_err(|e| ArtemisError::Transport(format!("Invalid signing secret: {}", e)))?;

        Ok(Self {
            app_key: app_key.into(),
            mac,
        })
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Canonical string covered by the signature
    pub fn string_to_sign(&self, method: &str, content_type: &str, path: &str) -> String {
        format!(
            "{}\n{}\n{}\nx-ca-key:{}\n{}",
            method, ACCEPT, content_type, self.app_key, path
        )
    }

    /// Base64 HMAC-SHA256 of the canonical string
    pub fn sign(&self, method: &str, content_type: &str, path: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(self.string_to_sign(method, content_type, path).as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("app_key", &self.app_key)
            .finish_non_exhaustive()
    }
}
