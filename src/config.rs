// src/config.rs
use std::fmt;

use clap::Parser;

use crate::address::TronAddress;
use crate::error::SupplyError;
use crate::supply::SupplyFormat;

pub const DEFAULT_RPC_URL: &str = "https://api.shasta.trongrid.io/jsonrpc";
pub const DEFAULT_CONTRACT_ADDRESS: &str = "TMzB9rdKu2eQuZaDEgeeRQkCzHz59DQi4C";

/// Read the total supply of a TRC-20 token.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Ethereum-compatible JSON-RPC endpoint of a TRON node
    #[arg(long, env = "TRON_RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Hex-encoded private key the client is bound to. Set TRON_PRIVATE_KEY
    /// in the environment or .env; passing it as a flag is discouraged
    /// (shell history, process listings)
    #[arg(long, env = "TRON_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// Token contract, base58check (T...) or hex
    #[arg(long, env = "TOKEN_ADDRESS", default_value = DEFAULT_CONTRACT_ADDRESS)]
    pub contract_address: String,

    /// Scale the supply by the token's decimals() instead of printing base units
    #[arg(long, env = "SUPPLY_HUMAN")]
    pub human: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.rpc_url.clone(), self.private_key.clone())
    }

    pub fn contract_address(&self) -> Result<TronAddress, SupplyError> {
        self.contract_address.parse()
    }

    pub fn format(&self) -> SupplyFormat {
        if self.human {
            SupplyFormat::Human
        } else {
            SupplyFormat::Raw
        }
    }
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("contract_address", &self.contract_address)
            .field("human", &self.human)
            .finish()
    }
}

/// Endpoint and credential a client is constructed from.
#[derive(Clone)]
pub struct ClientConfig {
    pub endpoint_url: String,
    pub credential_secret: String,
}

impl ClientConfig {
    pub fn new(endpoint_url: impl Into<String>, credential_secret: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            credential_secret: credential_secret.into(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("credential_secret", &"<redacted>")
            .finish()
    }
}
