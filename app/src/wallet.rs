//! Injected wallet provider adapter.
//!
//! Wraps the EIP-1193 provider object that wallet extensions inject at
//! `window.ethereum`. The wallet is used only to authorize accounts and to
//! sign transactions; every payload stays plain JSON-RPC, so the rest of
//! the app never touches JavaScript values directly.

use alloy_primitives::{Address, TxHash};
use js_sys::{Array, Function, Object, Promise, Reflect};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::AppError;
use crate::utils::abi;

/// Key under which wallet extensions inject their provider object.
const INJECTION_KEY: &str = "ethereum";

/// Browser-injected EIP-1193 provider.
#[derive(Clone)]
pub struct InjectedProvider {
    ethereum: Object,
}

impl InjectedProvider {
    /// Returns the provider injected on the current page, if any.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(INJECTION_KEY)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        value.dyn_into::<Object>().ok().map(|ethereum| Self { ethereum })
    }

    /// One `ethereum.request({ method, params })` round trip, awaiting the
    /// returned promise. Wallet rejections reject the promise and surface
    /// as [`AppError::WalletRequest`].
    pub async fn request(&self, method: &str, params: Value) -> Result<JsValue, AppError> {
        let payload = Object::new();
        Reflect::set(&payload, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(AppError::from_js)?;
        if !params.is_null() {
            let params = js_sys::JSON::parse(&params.to_string()).map_err(AppError::from_js)?;
            Reflect::set(&payload, &JsValue::from_str("params"), &params).map_err(AppError::from_js)?;
        }

        let request_fn = Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .map_err(AppError::from_js)?
            .dyn_into::<Function>()
            .map_err(|_| AppError::WalletRequest("provider has no request function".into()))?;

        let pending = request_fn.call1(&self.ethereum, &payload).map_err(AppError::from_js)?;
        let promise: Promise = pending
            .dyn_into()
            .map_err(|_| AppError::WalletRequest(format!("{method} did not return a promise")))?;

        JsFuture::from(promise).await.map_err(AppError::from_js)
    }

    /// Accounts already authorized for this page (`eth_accounts`, silent).
    pub async fn authorized_accounts(&self) -> Result<Vec<String>, AppError> {
        let result = self.request("eth_accounts", Value::Null).await?;
        account_list(result)
    }

    /// Prompts the user for account access (`eth_requestAccounts`).
    pub async fn request_accounts(&self) -> Result<Vec<String>, AppError> {
        let result = self.request("eth_requestAccounts", Value::Null).await?;
        account_list(result)
    }
}

fn account_list(result: JsValue) -> Result<Vec<String>, AppError> {
    let array = result
        .dyn_into::<Array>()
        .map_err(|_| AppError::WalletRequest("account response is not an array".into()))?;
    Ok(array.iter().filter_map(|entry| entry.as_string()).collect())
}

/// Signing handle for one authorized account.
///
/// Holds the provider plus the account address it signs for, the pieces a
/// state-changing contract call needs.
#[derive(Clone)]
pub struct WalletSigner {
    provider: InjectedProvider,
    address: Address,
}

impl WalletSigner {
    pub fn new(provider: InjectedProvider, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Signs and submits a contract call via `eth_sendTransaction`,
    /// returning the transaction hash. The wallet raises its own
    /// confirmation prompt; a user rejection rejects the promise.
    pub async fn send_transaction(&self, to: Address, data: &[u8]) -> Result<TxHash, AppError> {
        let params = serde_json::json!([{
            "from": format!("{:#x}", self.address),
            "to": format!("{to:#x}"),
            "data": abi::to_rpc_hex(data),
        }]);
        let result = self.provider.request("eth_sendTransaction", params).await?;
        let raw = result.as_string().ok_or_else(|| {
            AppError::MalformedResponse("eth_sendTransaction returned a non-string hash".into())
        })?;
        raw.parse()
            .map_err(|_| AppError::MalformedResponse(format!("not a transaction hash: {raw}")))
    }
}
