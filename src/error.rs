// src/error.rs
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot reach {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("no contract resolved at {address}: {reason}")]
    Resolution { address: String, reason: String },
    #[error("call to {method}() failed: {reason}")]
    Call { method: &'static str, reason: String },
    #[error("cannot write result: {0}")]
    Output(#[from] io::Error),
}

impl SupplyError {
    pub fn call(method: &'static str, reason: impl ToString) -> Self {
        SupplyError::Call {
            method,
            reason: reason.to_string(),
        }
    }

    /// Process exit status reported for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            SupplyError::Output(_) => 1,
            SupplyError::InvalidConfig(_) => 2,
            SupplyError::Connection { .. } => 3,
            SupplyError::Resolution { .. } => 4,
            SupplyError::Call { .. } => 5,
        }
    }
}
