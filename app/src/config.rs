use alloy_primitives::Address;

use crate::constants::{DEFAULT_CONTRACT_ADDRESS, DEFAULT_RPC_URL};
use crate::error::AppError;

/// Startup configuration.
///
/// The environment-sourced globals of the page (contract address, fallback
/// endpoint) become one explicit struct, built once in [`crate::run_app`]
/// and passed into the view controller at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address of the claim contract
    pub contract_address: Address,
    /// Read-only JSON-RPC endpoint used when no wallet is injected
    pub rpc_url: String,
}

impl AppConfig {
    /// Build the configuration from compile-time environment overrides,
    /// falling back to the checked-in defaults.
    ///
    /// Overrides: `CLAIMER_CONTRACT_ADDRESS`, `CLAIMER_RPC_URL`.
    pub fn from_env() -> Result<Self, AppError> {
        let raw_address = option_env!("CLAIMER_CONTRACT_ADDRESS").unwrap_or(DEFAULT_CONTRACT_ADDRESS);
        let contract_address = raw_address
            .parse()
            .map_err(|_| AppError::InvalidAddress(raw_address.to_string()))?;
        let rpc_url = option_env!("CLAIMER_RPC_URL").unwrap_or(DEFAULT_RPC_URL).to_string();

        Ok(Self { contract_address, rpc_url })
    }
}
