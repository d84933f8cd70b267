// src/lib.rs
use ethers::contract::abigen;

abigen!(TRC20, r#"[
    function totalSupply() external view returns (uint256)
    function decimals() external view returns (uint8)
]"#);

pub mod address;
pub mod client;
pub mod config;
pub mod error;
pub mod supply;
pub mod utils;

pub use address::TronAddress;
pub use client::{ContractHandle, TronClient};
pub use error::SupplyError;
pub use supply::{SupplyFormat, TotalSupply};
