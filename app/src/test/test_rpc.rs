use serde_json::json;

use crate::error::AppError;
use crate::rpc::{RpcRequest, RpcResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_serialize_to_the_canonical_shape() {
        let request = RpcRequest::new("eth_call", json!([{ "to": "0x00" }, "latest"]));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "eth_call",
                "params": [{ "to": "0x00" }, "latest"],
            })
        );
    }

    #[test]
    fn success_responses_carry_a_result() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":"0x02"}"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.result, Some(json!("0x02")));
        assert!(response.error.is_none());
    }

    #[test]
    fn null_results_stay_distinguishable_from_errors() {
        // eth_getTransactionReceipt returns a null result until the
        // transaction is mined; that is not a server error.
        let body = r#"{"jsonrpc":"2.0","id":1,"result":null}"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();

        assert!(response.error.is_none());
    }

    #[test]
    fn error_responses_parse_code_and_message() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();

        let err = response.error.expect("error object must parse");
        assert_eq!(err.code, -32000);
        assert_eq!(err.message, "execution reverted");

        let app_err = AppError::Rpc { code: err.code, message: err.message };
        assert_eq!(app_err.to_string(), "json-rpc error -32000: execution reverted");
    }
}
