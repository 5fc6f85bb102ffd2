//! # Application State
//!
//! Shared state for the Axum application.
//! Built once at startup from a [`SecretSource`]; immutable afterwards.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wert_core::{BoxedSessionProvider, SecretSource, SessionError, WalletList};
use wert_partner::{WertConfig, WertSessionClient};

/// Explicit wallet file location
pub const WALLETS_FILE_VAR: &str = "WERT_WALLETS_FILE";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory of frontend files served as-is
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load from a secret source (normally the environment)
    pub fn from_source(source: &dyn SecretSource) -> Self {
        let port = match source.secret("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT={:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: source
                .secret("HOST")
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            static_dir: source
                .secret("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, SessionError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                SessionError::Configuration(format!(
                    "invalid listen address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Session provider (Wert in production)
    pub provider: BoxedSessionProvider,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state around an existing provider
    pub fn new(config: AppConfig, provider: BoxedSessionProvider) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }

    /// Build the full production state.
    ///
    /// Fails when any required Wert credential is missing or the wallet
    /// file is unusable, so the server never starts half-configured.
    pub fn from_source(source: &dyn SecretSource) -> Result<Self, SessionError> {
        let wert = WertConfig::from_secrets(source)?;
        let wallets = load_wallets(source)?;
        let config = AppConfig::from_source(source);

        tracing::info!(
            "Wert partner {} via {} ({} wallets)",
            wert.partner_id,
            wert.api_base_url,
            wallets.len()
        );

        let client = WertSessionClient::new(wert.with_wallets(wallets))?;

        Ok(Self::new(config, Arc::new(client)))
    }
}

/// Load the wallet list.
///
/// `WERT_WALLETS_FILE` wins when set; otherwise `config/wallets.toml` is
/// searched from the working directory upwards. Falls back to the
/// built-in sandbox wallets.
fn load_wallets(source: &dyn SecretSource) -> Result<WalletList, SessionError> {
    if let Some(path) = source.secret(WALLETS_FILE_VAR) {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SessionError::Configuration(format!("Failed to read {}: {}", path, e))
        })?;
        return parse_wallets(&content, Path::new(&path));
    }

    let config_paths = [
        "config/wallets.toml",
        "../config/wallets.toml",
        "../../config/wallets.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            return parse_wallets(&content, Path::new(path));
        }
    }

    tracing::warn!("No wallet config found, using built-in sandbox wallets");
    Ok(WalletList::default())
}

fn parse_wallets(content: &str, path: &Path) -> Result<WalletList, SessionError> {
    let wallets = WalletList::from_toml(content).map_err(|e| {
        SessionError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    if wallets.is_empty() {
        return Err(SessionError::Configuration(format!(
            "{} defines no wallets",
            path.display()
        )));
    }

    tracing::info!("Loaded {} wallets from {}", wallets.len(), path.display());
    Ok(wallets)
}
