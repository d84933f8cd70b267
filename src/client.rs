// src/client.rs
use std::sync::Arc;

use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::U256;
use log::{debug, info, warn};

use crate::address::TronAddress;
use crate::config::ClientConfig;
use crate::error::SupplyError;
use crate::supply::TotalSupply;
use crate::TRC20;

pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// A JSON-RPC client bound to one endpoint.
#[derive(Debug)]
pub struct TronClient<M> {
    client: Arc<M>,
    endpoint: String,
}

impl TronClient<SignerClient> {
    /// Builds the signing client and checks the endpoint answers `eth_chainId`.
    pub async fn connect(config: &ClientConfig) -> Result<Self, SupplyError> {
        let endpoint = config.endpoint_url.trim();
        if endpoint.starts_with("http://") {
            warn!("{endpoint} is not using TLS");
        } else if !endpoint.starts_with("https://") {
            return Err(SupplyError::InvalidConfig(format!(
                "endpoint {endpoint:?} must be an http(s) URL"
            )));
        }
        let provider = Provider::<Http>::try_from(endpoint)
            .map_err(|e| SupplyError::InvalidConfig(format!("endpoint {endpoint:?}: {e}")))?;

        // never echo the key itself
        let wallet = config
            .credential_secret
            .trim()
            .parse::<LocalWallet>()
            .map_err(|_| SupplyError::InvalidConfig("private key is not a valid hex secp256k1 key".to_string()))?;

        let chain_id = provider
            .get_chainid()
            .await
            .map_err(|e| SupplyError::Connection {
                endpoint: endpoint.to_string(),
                source: Box::new(e),
            })?;
        let wallet = wallet.with_chain_id(chain_id.low_u64());
        info!(
            "connected to {endpoint} (chain id {chain_id}) as {}",
            TronAddress::from(wallet.address())
        );

        Ok(Self::new(SignerMiddleware::new(provider, wallet), endpoint))
    }
}

impl<M: Middleware + 'static> TronClient<M> {
    pub fn new(client: M, endpoint: impl Into<String>) -> Self {
        Self {
            client: Arc::new(client),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Looks up the code stored at `address` and binds a handle to it.
    pub async fn resolve_contract(&self, address: TronAddress) -> Result<ContractHandle<M>, SupplyError> {
        let code = self
            .client
            .get_code(address.to_evm(), None)
            .await
            .map_err(|e| SupplyError::Resolution {
                address: address.to_string(),
                reason: e.to_string(),
            })?;
        if code.as_ref().is_empty() {
            return Err(SupplyError::Resolution {
                address: address.to_string(),
                reason: "no contract code deployed".to_string(),
            });
        }
        debug!(
            "resolved {address} on {} ({} bytes of code)",
            self.endpoint,
            code.len()
        );
        Ok(ContractHandle::new(address, self.client.clone()))
    }
}

/// A token contract resolved for the duration of one run.
#[derive(Debug)]
pub struct ContractHandle<M> {
    address: TronAddress,
    contract: TRC20<M>,
}

impl<M: Middleware + 'static> ContractHandle<M> {
    pub fn new(address: TronAddress, client: Arc<M>) -> Self {
        Self {
            address,
            contract: TRC20::new(address.to_evm(), client),
        }
    }

    pub fn address(&self) -> TronAddress {
        self.address
    }

    pub async fn decimals(&self) -> Result<u8, SupplyError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| SupplyError::call("decimals", e))
    }
}

#[async_trait]
impl<M: Middleware + 'static> TotalSupply for ContractHandle<M> {
    async fn total_supply(&self) -> Result<U256, SupplyError> {
        self.contract
            .total_supply()
            .call()
            .await
            .map_err(|e| SupplyError::call("totalSupply", e))
    }
}
