use alloy_primitives::{hex, keccak256, Address, U256};

use crate::error::AppError;

/// First four bytes of the keccak-256 hash of a canonical signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Call data for a no-argument function: just the selector.
pub fn encode_call(signature: &str) -> Vec<u8> {
    selector(signature).to_vec()
}

/// Call data for a single-address function: the selector followed by the
/// address left-padded to one 32-byte word.
pub fn encode_address_call(signature: &str, address: Address) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&selector(signature));
    data.extend_from_slice(&[0u8; 12]);
    data.extend_from_slice(address.as_slice());
    data
}

/// Hex-encode call data with the `0x` prefix JSON-RPC expects.
pub fn to_rpc_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Decode a single unsigned word from an `eth_call` result.
/// An empty `0x` decodes as zero, matching node behavior for calls that
/// return no data.
pub fn decode_uint(raw: &str) -> Result<U256, AppError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 16)
        .map_err(|_| AppError::MalformedResponse(format!("not a hex quantity: {raw}")))
}
