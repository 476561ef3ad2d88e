/**
 * Application Constants
 *
 * This module defines all the constant values used throughout the claim
 * front-end. These constants control the claim limit, the fixed contract
 * interface, transaction-finality polling, and default configuration.
 */

/// ===== CLAIM CONSTANTS =====

/// Maximum number of tokens one address may claim
/// - Mirrors the cap enforced by the on-chain contract
/// - Slot `i` renders as "Claimed" exactly when `i < claimed count`
pub const CLAIM_LIMIT: u8 = 3;

/// ===== CONTRACT INTERFACE CONSTANTS =====

/// Canonical signature of the claimed-count view function
/// - `claims(address) -> uint256`, read via `eth_call`
pub const CLAIMS_SIGNATURE: &str = "claims(address)";

/// Canonical signature of the state-changing claim function
/// - Sent via `eth_sendTransaction` from the connected signer
pub const CLAIM_TOKENS_SIGNATURE: &str = "claimTokens()";

/// ===== TRANSACTION FINALITY CONSTANTS =====

/// Interval between `eth_getTransactionReceipt` polls, in milliseconds
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 4_000;

/// Number of receipt polls before a claim is reported as unconfirmed
/// - 45 polls at 4s each gives a three-minute window
pub const RECEIPT_POLL_ATTEMPTS: u32 = 45;

/// ===== DEFAULT CONFIGURATION =====

// PLACEHOLDER — replace with the deployed claim contract address, or set
// CLAIMER_CONTRACT_ADDRESS at build time.
/// Default claim contract address used when no build-time override is set
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x1C7E83f8C581a967940DBfa7984744646AE46b29";

/// Default read-only JSON-RPC endpoint for the no-wallet fallback path
pub const DEFAULT_RPC_URL: &str = "https://rpc.sepolia.org";
