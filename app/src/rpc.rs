//! JSON-RPC plumbing shared by the injected and read-only transports.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::JsValue;

use crate::error::{describe_js_value, AppError};
use crate::wallet::InjectedProvider;

/// Single JSON-RPC 2.0 request body.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: Value) -> Self {
        Self { jsonrpc: "2.0", id: 1, method, params }
    }
}

/// JSON-RPC 2.0 response body. Exactly one of `result` and `error` is set
/// by a conforming server.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// Server-side error object carried in a failed response.
#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/**
 * Read-only JSON-RPC transport over HTTP
 *
 * The single no-wallet fallback path: constructed once at mount when no
 * injected provider exists and used uniformly for every read thereafter.
 * It cannot sign, so claiming stays unavailable on this transport.
 */
#[derive(Debug, Clone)]
pub struct ReadOnlyProvider {
    url: String,
}

impl ReadOnlyProvider {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn call(&self, method: &str, params: Value) -> Result<Value, AppError> {
        let request = RpcRequest::new(method, params);
        let response = gloo_net::http::Request::post(&self.url)
            .json(&request)?
            .send()
            .await?;
        let body: RpcResponse = response.json().await?;
        if let Some(err) = body.error {
            return Err(AppError::Rpc { code: err.code, message: err.message });
        }
        Ok(body.result.unwrap_or(Value::Null))
    }
}

/// Transport behind the contract client: the injected provider when a
/// wallet is present, the read-only HTTP endpoint otherwise.
#[derive(Clone)]
pub enum Transport {
    Injected(InjectedProvider),
    ReadOnly(ReadOnlyProvider),
}

impl Transport {
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, AppError> {
        match self {
            Transport::Injected(provider) => {
                let value = provider.request(method, params).await?;
                js_value_to_json(&value)
            }
            Transport::ReadOnly(provider) => provider.call(method, params).await,
        }
    }
}

/// Convert a provider result into plain JSON. `undefined` (e.g. a receipt
/// that does not exist yet) maps to `null`.
fn js_value_to_json(value: &JsValue) -> Result<Value, AppError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    let text = js_sys::JSON::stringify(value)
        .map_err(|e| AppError::MalformedResponse(describe_js_value(&e)))?
        .as_string()
        .ok_or_else(|| AppError::MalformedResponse("unstringifiable provider result".into()))?;
    serde_json::from_str(&text).map_err(|e| AppError::MalformedResponse(e.to_string()))
}
