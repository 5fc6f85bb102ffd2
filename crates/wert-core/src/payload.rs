//! # Provider Payload
//!
//! The body sent to the partner API: partner identity, origin, the
//! caller's amount/currency and the configured wallet list.
//!
//! Field order is part of the contract because the signature is
//! computed over the serialized form (see [`crate::signature`]).

use crate::error::SessionResult;
use crate::session::SessionRequest;
use crate::signature::sign_payload;
use crate::wallet::{Wallet, WalletList};
use serde::Serialize;
use serde_json::Value;

/// Session payload before signing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderPayload {
    pub partner_id: String,
    pub origin: String,
    pub amount: Value,
    pub currency: Value,
    pub extra: PayloadExtra,
}

/// The `extra` block carrying destination wallets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadExtra {
    pub wallets: Vec<Wallet>,
}

impl ProviderPayload {
    /// Merge the caller's request into the configured template.
    pub fn new(
        partner_id: impl Into<String>,
        origin: impl Into<String>,
        wallets: &WalletList,
        request: &SessionRequest,
    ) -> Self {
        Self {
            partner_id: partner_id.into(),
            origin: origin.into(),
            amount: request.amount.clone(),
            currency: request.currency.clone(),
            extra: PayloadExtra {
                wallets: wallets.wallets.clone(),
            },
        }
    }

    /// Compact JSON form that the signature covers
    pub fn to_canonical_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Sign with the partner's private key
    pub fn sign(self, private_key: &str) -> SessionResult<SignedPayload> {
        let signature = sign_payload(&self, private_key)?;
        Ok(SignedPayload {
            payload: self,
            signature,
        })
    }
}

/// Payload with its signature appended as the last field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignedPayload {
    #[serde(flatten)]
    pub payload: ProviderPayload,
    pub signature: String,
}
