//! Claim-contract client.

use alloy_primitives::{Address, TxHash, U256};
use gloo_timers::future::TimeoutFuture;
use serde_json::json;

use crate::constants::{
    CLAIMS_SIGNATURE, CLAIM_LIMIT, CLAIM_TOKENS_SIGNATURE, RECEIPT_POLL_ATTEMPTS,
    RECEIPT_POLL_INTERVAL_MS,
};
use crate::error::AppError;
use crate::rpc::Transport;
use crate::utils::abi;
use crate::wallet::WalletSigner;

/**
 * Client for the fixed claim contract
 *
 * Wraps the two calls the page makes: the `claims(address)` view that
 * returns how many tokens an address has claimed, and the state-changing
 * `claimTokens()` call that claims the next one. The contract address and
 * interface are fixed at startup; only the transport varies.
 */
#[derive(Clone)]
pub struct ClaimContract {
    address: Address,
    transport: Transport,
}

impl ClaimContract {
    pub fn new(address: Address, transport: Transport) -> Self {
        Self { address, transport }
    }

    /// Read the claimed-token count for `owner`.
    pub async fn claimed_count(&self, owner: Address) -> Result<u8, AppError> {
        let data = abi::encode_address_call(CLAIMS_SIGNATURE, owner);
        let params = json!([
            { "to": format!("{:#x}", self.address), "data": abi::to_rpc_hex(&data) },
            "latest",
        ]);
        let result = self.transport.call("eth_call", params).await?;
        let raw = result
            .as_str()
            .ok_or_else(|| AppError::MalformedResponse(format!("eth_call returned {result}")))?;
        Ok(count_from_word(abi::decode_uint(raw)?))
    }

    /// Send `claimTokens()` from `signer` and await transaction finality.
    pub async fn claim_tokens(&self, signer: &WalletSigner) -> Result<(), AppError> {
        let data = abi::encode_call(CLAIM_TOKENS_SIGNATURE);
        let tx_hash = signer.send_transaction(self.address, &data).await?;
        log::debug!("claim transaction submitted: {tx_hash:#x}");
        self.wait_for_receipt(tx_hash).await
    }

    /// Poll for the transaction receipt until the claim is mined.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<(), AppError> {
        let tx_hex = format!("{tx_hash:#x}");
        for _ in 0..RECEIPT_POLL_ATTEMPTS {
            let receipt = self
                .transport
                .call("eth_getTransactionReceipt", json!([tx_hex.as_str()]))
                .await?;
            if !receipt.is_null() {
                // status "0x1" mined, "0x0" reverted
                let reverted = receipt.get("status").and_then(|s| s.as_str()) == Some("0x0");
                return if reverted {
                    Err(AppError::TransactionReverted(tx_hex))
                } else {
                    Ok(())
                };
            }
            TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await;
        }
        Err(AppError::ReceiptTimeout(tx_hex))
    }
}

/// Clamp the on-chain count word into the claim domain. Rendering treats
/// every count at or above the limit identically, so the clamp is lossless
/// for the UI.
pub fn count_from_word(word: U256) -> u8 {
    u8::try_from(word).unwrap_or(CLAIM_LIMIT).min(CLAIM_LIMIT)
}
