use alloy_primitives::{keccak256, Address, U256};

use crate::constants::{CLAIMS_SIGNATURE, CLAIM_TOKENS_SIGNATURE};
use crate::contract::count_from_word;
use crate::utils::abi;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_is_the_first_four_hash_bytes() {
        let digest = keccak256(CLAIMS_SIGNATURE.as_bytes());
        assert_eq!(abi::selector(CLAIMS_SIGNATURE), digest[..4]);
    }

    #[test]
    fn distinct_signatures_get_distinct_selectors() {
        assert_ne!(abi::selector(CLAIMS_SIGNATURE), abi::selector(CLAIM_TOKENS_SIGNATURE));
    }

    #[test]
    fn address_call_data_is_selector_plus_one_padded_word() {
        let owner = Address::repeat_byte(0xab);
        let data = abi::encode_address_call(CLAIMS_SIGNATURE, owner);

        assert_eq!(data.len(), 4 + 32);
        assert_eq!(data[..4], abi::selector(CLAIMS_SIGNATURE));
        assert!(data[4..16].iter().all(|byte| *byte == 0), "address must be left-padded");
        assert_eq!(&data[16..], owner.as_slice());
    }

    #[test]
    fn no_argument_call_data_is_just_the_selector() {
        let data = abi::encode_call(CLAIM_TOKENS_SIGNATURE);
        assert_eq!(data, abi::selector(CLAIM_TOKENS_SIGNATURE));
    }

    #[test]
    fn rpc_hex_is_prefixed_lowercase() {
        assert_eq!(abi::to_rpc_hex(&[0x00, 0xAB, 0xCD]), "0x00abcd");
        assert_eq!(abi::to_rpc_hex(&[]), "0x");
    }

    #[test]
    fn uint_decoding_accepts_call_results() {
        let word = format!("0x{:064x}", 2);
        assert_eq!(abi::decode_uint(&word).unwrap(), U256::from(2));
        assert_eq!(abi::decode_uint("0x1f").unwrap(), U256::from(31));
        assert_eq!(abi::decode_uint("1f").unwrap(), U256::from(31));
    }

    #[test]
    fn empty_call_result_decodes_as_zero() {
        assert_eq!(abi::decode_uint("0x").unwrap(), U256::ZERO);
    }

    #[test]
    fn garbage_call_result_is_rejected() {
        assert!(abi::decode_uint("0xzz").is_err());
    }

    #[test]
    fn count_words_clamp_into_the_claim_domain() {
        assert_eq!(count_from_word(U256::ZERO), 0);
        assert_eq!(count_from_word(U256::from(2)), 2);
        assert_eq!(count_from_word(U256::from(3)), 3);
        assert_eq!(count_from_word(U256::from(7)), 3, "overshoot renders as exhausted");
        assert_eq!(count_from_word(U256::MAX), 3);
    }
}
