// src/address.rs
use std::fmt;
use std::str::FromStr;

use ethers::types::Address;
use ethers::utils::hex;

use crate::error::SupplyError;

/// Leading byte of every TRON account and contract address.
pub const TRON_ADDRESS_PREFIX: u8 = 0x41;

const ADDRESS_LEN: usize = 21;

/// A TRON address: the `0x41` prefix followed by the 20-byte EVM address.
///
/// Accepts base58check (`T...`), 42-char hex with a `41` prefix, or a
/// `0x`-prefixed 20-byte EVM address. Always displayed as base58check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TronAddress([u8; ADDRESS_LEN]);

impl TronAddress {
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// The address as seen by the node's Ethereum-compatible JSON-RPC.
    pub fn to_evm(&self) -> Address {
        Address::from_slice(&self.0[1..])
    }

    fn from_payload(payload: &[u8]) -> Result<Self, SupplyError> {
        if payload.len() != ADDRESS_LEN {
            return Err(SupplyError::InvalidConfig(format!(
                "address must be {ADDRESS_LEN} bytes, got {}",
                payload.len()
            )));
        }
        if payload[0] != TRON_ADDRESS_PREFIX {
            return Err(SupplyError::InvalidConfig(format!(
                "address prefix must be 0x{TRON_ADDRESS_PREFIX:02x}, got 0x{:02x}",
                payload[0]
            )));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(payload);
        Ok(TronAddress(bytes))
    }
}

impl From<Address> for TronAddress {
    fn from(address: Address) -> Self {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = TRON_ADDRESS_PREFIX;
        bytes[1..].copy_from_slice(address.as_bytes());
        TronAddress(bytes)
    }
}

impl FromStr for TronAddress {
    type Err = SupplyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(evm) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            let address = evm
                .parse::<Address>()
                .map_err(|e| SupplyError::InvalidConfig(format!("bad hex address {s:?}: {e}")))?;
            return Ok(address.into());
        }
        if s.len() == ADDRESS_LEN * 2 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            let payload = hex::decode(s)
                .map_err(|e| SupplyError::InvalidConfig(format!("bad hex address {s:?}: {e}")))?;
            return Self::from_payload(&payload);
        }
        let payload = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|e| SupplyError::InvalidConfig(format!("bad base58 address {s:?}: {e}")))?;
        Self::from_payload(&payload)
    }
}

impl fmt::Display for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).with_check().into_string())
    }
}
