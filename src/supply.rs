// src/supply.rs
use std::io::Write;

use async_trait::async_trait;
use ethers::providers::Middleware;
use ethers::types::U256;
use log::{debug, info};

use crate::client::ContractHandle;
use crate::error::SupplyError;
use crate::utils;

/// Label printed in front of the supply value.
pub const SUPPLY_LABEL: &str = "Toplam Arz";

/// Read-only access to a token's `totalSupply()`.
#[async_trait]
pub trait TotalSupply {
    async fn total_supply(&self) -> Result<U256, SupplyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupplyFormat {
    /// Integer base units, as returned by the contract.
    #[default]
    Raw,
    /// Scaled by the token's `decimals()`.
    Human,
}

pub fn format_supply(value: U256, decimals: Option<u8>) -> String {
    let value = match decimals {
        Some(decimals) => utils::u256_to_human(value, decimals),
        None => utils::u256_to_raw(value),
    };
    format!("{SUPPLY_LABEL}: {value}")
}

/// Fetches the supply and writes one labelled line to `out`.
///
/// Nothing is written when the call fails.
pub async fn run<C, W>(contract: &C, decimals: Option<u8>, out: &mut W) -> Result<U256, SupplyError>
where
    C: TotalSupply + Sync + ?Sized,
    W: Write,
{
    let value = contract.total_supply().await?;
    debug!("totalSupply() returned {value}");
    writeln!(out, "{}", format_supply(value, decimals))?;
    out.flush()?;
    Ok(value)
}

/// Runs the check against a resolved contract, querying `decimals()` first
/// when `format` asks for scaled output.
pub async fn check_total_supply<M, W>(
    contract: &ContractHandle<M>,
    format: SupplyFormat,
    out: &mut W,
) -> Result<U256, SupplyError>
where
    M: Middleware + 'static,
    W: Write,
{
    let decimals = match format {
        SupplyFormat::Raw => None,
        SupplyFormat::Human => Some(contract.decimals().await?),
    };
    let value = run(contract, decimals, out).await?;
    info!("total supply of {} is {value}", contract.address());
    Ok(value)
}
