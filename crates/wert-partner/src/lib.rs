//! # wert-partner
//!
//! Wert partner API integration for the session proxy.
//!
//! [`WertSessionClient`] builds the session payload from [`WertConfig`]
//! plus the caller's amount/currency, signs it and posts it to
//! `https://partner.wert.io/api/v1/session`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wert_core::{EnvSecrets, SessionProvider, SessionRequest};
//! use wert_partner::{WertConfig, WertSessionClient};
//!
//! let config = WertConfig::from_secrets(&EnvSecrets::load())?;
//! let client = WertSessionClient::new(config)?;
//!
//! let session = client.create_session(&SessionRequest::default()).await?;
//! ```

pub mod config;
pub mod session;

// Re-exports
pub use config::WertConfig;
pub use session::WertSessionClient;
