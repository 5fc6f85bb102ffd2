//! # Payload Signature
//!
//! `signature = hex(HMAC-SHA256(key = private_key, msg = compact_json(payload)))`
//!
//! The message is the payload serialized with `serde_json::to_string`:
//! no whitespace, keys in struct declaration order. The key is used as
//! raw UTF-8 bytes.

use crate::error::{SessionError, SessionResult};
use crate::payload::ProviderPayload;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a payload with the partner's private key
pub fn sign_payload(payload: &ProviderPayload, private_key: &str) -> SessionResult<String> {
    let message = payload.to_canonical_json()?;
    compute_hmac_sha256(private_key, message.as_bytes())
}

/// Lowercase hex HMAC-SHA256 of `message`
pub fn compute_hmac_sha256(secret: &str, message: &[u8]) -> SessionResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SessionError::Signing(e.to_string()))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
