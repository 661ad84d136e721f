//! Request signing for Kraken private endpoints.
//!
//! The exchange authenticates a request with an `API-Sign` header computed
//! as HMAC-SHA512 over `path || SHA256(nonce || encoded_payload)`, keyed
//! with the base64-decoded API secret and emitted as base64.
//!
//! The payload encoding is selected explicitly by the caller via
//! [`SignaturePayload`]; the exchange accepts either form as long as the
//! bytes that were signed match the bytes sent as the request body.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

type HmacSha512 = Hmac<Sha512>;

#[derive(Error, Debug)]
pub enum SigningError {
    #[error("API secret is not valid base64")]
    InvalidSecretEncoding,

    #[error("payload has no nonce field")]
    MissingNonce,

    /// The nonce must already be formatted as a string by the caller;
    /// silent coercion would let the signed text diverge from the body.
    #[error("payload nonce is not a string")]
    NonStringNonce,

    #[error("payload could not be encoded: {0}")]
    MalformedPayload(String),
}

/// Payload encoding used for signing, chosen per call site.
#[derive(Debug, Clone, Copy)]
pub enum SignaturePayload<'a> {
    /// The exact JSON text of the request body. The `nonce` field is
    /// extracted from the document and prepended before hashing.
    JsonText(&'a str),
    /// Key/value pairs serialized as `application/x-www-form-urlencoded`
    /// in caller order, prepended with the value of the `nonce` pair.
    Form(&'a [(&'a str, &'a str)]),
}

impl SignaturePayload<'_> {
    fn encode(&self) -> Result<String, SigningError> {
        match self {
            SignaturePayload::JsonText(text) => {
                let doc: serde_json::Value = serde_json::from_str(text)
                    .map_err(|e| SigningError::MalformedPayload(e.to_string()))?;
                let nonce = doc.get("nonce").ok_or(SigningError::MissingNonce)?;
                let nonce = nonce.as_str().ok_or(SigningError::NonStringNonce)?;
                Ok(format!("{nonce}{text}"))
            }
            SignaturePayload::Form(pairs) => {
                let nonce = pairs
                    .iter()
                    .find(|(key, _)| *key == "nonce")
                    .map(|(_, value)| *value)
                    .ok_or(SigningError::MissingNonce)?;
                let encoded = serde_urlencoded::to_string(pairs)
                    .map_err(|e| SigningError::MalformedPayload(e.to_string()))?;
                Ok(format!("{nonce}{encoded}"))
            }
        }
    }
}

/// Compute the `API-Sign` header value for a private endpoint call.
///
/// Deterministic in (path, payload, secret); `secret` is the
/// base64-encoded API secret as issued by the exchange.
pub fn sign(
    path: &str,
    payload: SignaturePayload<'_>,
    secret: &str,
) -> Result<String, SigningError> {
    let encoded = payload.encode()?;
    let digest = Sha256::digest(encoded.as_bytes());

    let mut message = path.as_bytes().to_vec();
    message.extend_from_slice(&digest);

    let key = BASE64
        .decode(secret)
        .map_err(|_| SigningError::InvalidSecretEncoding)?;
    let mut mac = HmacSha512::new_from_slice(&key)
        .map_err(|_| SigningError::InvalidSecretEncoding)?;
    mac.update(&message);

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Nanosecond timestamp used as the per-request nonce. The exchange
/// requires nonces to strictly increase per API key, which holds as long
/// as the system clock moves forward between invocations.
pub fn nonce_ns() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
