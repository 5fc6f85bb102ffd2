//! # wert-core
//!
//! Core types and traits for the Wert session proxy.
//!
//! This crate provides:
//! - `SessionRequest` for the caller's amount/currency (with defaults)
//! - `Wallet` and `WalletList` for the configured destination wallets
//! - `ProviderPayload` and `SignedPayload` for the partner API body
//! - HMAC-SHA256 payload signing
//! - `SecretSource` for named-secret lookup
//! - `SessionProvider` trait for the provider integration
//! - `SessionError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use wert_core::{ProviderPayload, SessionRequest, WalletList};
//!
//! let request = SessionRequest::from_body(br#"{"amount":25}"#)?;
//! let signed = ProviderPayload::new(
//!     "01PARTNER",
//!     "https://sandbox.wert.io",
//!     &WalletList::default(),
//!     &request,
//! )
//! .sign("private-key")?;
//!
//! assert_eq!(signed.payload.currency, "USD");
//! assert_eq!(signed.signature.len(), 64);
//! # Ok::<(), wert_core::SessionError>(())
//! ```

pub mod error;
pub mod payload;
pub mod provider;
pub mod secrets;
pub mod session;
pub mod signature;
pub mod wallet;

// Re-exports for convenience
pub use error::{SessionError, SessionResult};
pub use payload::{PayloadExtra, ProviderPayload, SignedPayload};
pub use provider::{BoxedSessionProvider, SessionProvider};
pub use secrets::{EnvSecrets, SecretSource, StaticSecrets};
pub use session::{SessionRequest, DEFAULT_AMOUNT, DEFAULT_CURRENCY};
pub use signature::{compute_hmac_sha256, sign_payload};
pub use wallet::{Wallet, WalletList};
