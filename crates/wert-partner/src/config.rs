//! # Wert Configuration
//!
//! Partner credentials, endpoint and payload template for the Wert
//! partner API. Secrets are read once through a [`SecretSource`].

use std::fmt;
use wert_core::{ProviderPayload, SecretSource, SessionError, SessionRequest, WalletList};

/// Partner API key (bearer credential)
pub const PARTNER_API_KEY_VAR: &str = "WERT_PARTNER_API_KEY";
/// Partner identifier embedded in every payload
pub const PARTNER_ID_VAR: &str = "WERT_PARTNER_ID";
/// Private key used to sign payloads
pub const PRIVATE_KEY_VAR: &str = "WERT_PRIVATE_KEY";
/// Optional override of the partner API host
pub const API_BASE_URL_VAR: &str = "WERT_API_BASE_URL";
/// Optional override of the payload origin
pub const ORIGIN_VAR: &str = "WERT_ORIGIN";

pub const DEFAULT_API_BASE_URL: &str = "https://partner.wert.io";
pub const DEFAULT_ORIGIN: &str = "https://sandbox.wert.io";

const SESSION_PATH: &str = "/api/v1/session";

/// Wert partner API configuration
#[derive(Clone)]
pub struct WertConfig {
    /// Bearer key for the partner API
    pub api_key: String,

    /// Partner identifier (`partner_id` in the payload)
    pub partner_id: String,

    /// HMAC key for the payload signature
    pub private_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// `origin` sent in the payload
    pub origin: String,

    /// Destination wallets sent in `extra.wallets`
    pub wallets: WalletList,
}

impl WertConfig {
    /// Load configuration from a secret source.
    ///
    /// Required:
    /// - `WERT_PARTNER_API_KEY`
    /// - `WERT_PARTNER_ID`
    /// - `WERT_PRIVATE_KEY`
    ///
    /// All missing names are reported together.
    pub fn from_secrets(source: &dyn SecretSource) -> Result<Self, SessionError> {
        let api_key = source.secret(PARTNER_API_KEY_VAR);
        let partner_id = source.secret(PARTNER_ID_VAR);
        let private_key = source.secret(PRIVATE_KEY_VAR);

        let (api_key, partner_id, private_key) = match (api_key, partner_id, private_key) {
            (Some(a), Some(p), Some(k)) => (a, p, k),
            (a, p, k) => {
                let missing: Vec<&str> = [
                    (a.is_none(), PARTNER_API_KEY_VAR),
                    (p.is_none(), PARTNER_ID_VAR),
                    (k.is_none(), PRIVATE_KEY_VAR),
                ]
                .into_iter()
                .filter_map(|(absent, name)| absent.then_some(name))
                .collect();

                return Err(SessionError::Configuration(format!(
                    "missing environment variables: {}",
                    missing.join(", ")
                )));
            }
        };

        let mut config = Self::new(api_key, partner_id, private_key);

        if let Some(url) = source.secret(API_BASE_URL_VAR) {
            config = config.with_api_base_url(url);
        }
        if let Some(origin) = source.secret(ORIGIN_VAR) {
            config = config.with_origin(origin);
        }

        Ok(config)
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        api_key: impl Into<String>,
        partner_id: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            partner_id: partner_id.into(),
            private_key: private_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            wallets: WalletList::default(),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Full URL of the session-creation endpoint
    pub fn session_url(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), SESSION_PATH)
    }

    /// Fill the payload template with the caller's request
    pub fn build_payload(&self, request: &SessionRequest) -> ProviderPayload {
        ProviderPayload::new(&self.partner_id, &self.origin, &self.wallets, request)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set payload origin
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Builder: replace the wallet list
    pub fn with_wallets(mut self, wallets: WalletList) -> Self {
        self.wallets = wallets;
        self
    }
}

impl fmt::Debug for WertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WertConfig")
            .field("api_key", &"<redacted>")
            .field("partner_id", &self.partner_id)
            .field("private_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("origin", &self.origin)
            .field("wallets", &self.wallets.len())
            .finish()
    }
}
