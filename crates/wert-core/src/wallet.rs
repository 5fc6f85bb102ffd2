//! # Wallet Configuration
//!
//! Destination wallets sent to the provider in every session payload.
//! Wallets are loaded from `config/wallets.toml`; when no file is
//! present the built-in sandbox list is used.

use serde::{Deserialize, Serialize};

/// Sandbox address shared by the built-in wallets
const SANDBOX_ADDRESS: &str = "0x0118E8e2FCb391bCeb110F62b5B7B963477C1E0d";

/// A single destination wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    /// Display name / commodity (e.g., "ETH")
    pub name: String,
    /// Network identifier (e.g., "sepolia")
    pub network: String,
    /// Address on that network
    pub address: String,
}

impl Wallet {
    pub fn new(
        name: impl Into<String>,
        network: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            network: network.into(),
            address: address.into(),
        }
    }
}

/// Ordered list of destination wallets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletList {
    #[serde(default)]
    pub wallets: Vec<Wallet>,
}

impl WalletList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            wallets: Vec::new(),
        }
    }

    /// Builder: append a wallet
    pub fn with_wallet(mut self, wallet: Wallet) -> Self {
        self.wallets.push(wallet);
        self
    }

    /// Parse from TOML (`[[wallets]]` tables)
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Number of wallets
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Iterate wallets in order
    pub fn iter(&self) -> impl Iterator<Item = &Wallet> {
        self.wallets.iter()
    }
}

impl Default for WalletList {
    /// Sandbox wallets on Polygon Amoy and Ethereum Sepolia
    fn default() -> Self {
        Self::new()
            .with_wallet(Wallet::new("TT", "amoy", SANDBOX_ADDRESS))
            .with_wallet(Wallet::new("ETH", "sepolia", SANDBOX_ADDRESS))
    }
}
