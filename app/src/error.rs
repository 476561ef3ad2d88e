use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures surfaced by the wallet, transport, and contract layers.
///
/// None of these reach the user as a visible error state: every operation
/// boundary catches its error and logs it, leaving the UI free for a manual
/// retry.
#[derive(Debug, Error)]
pub enum AppError {
    // Wallet provider errors
    #[error("wallet request failed: {0}")]
    WalletRequest(String),
    #[error("wallet returned no authorized accounts")]
    NoAccounts,
    #[error("wallet returned a malformed account address: {0}")]
    MalformedAccount(String),

    // Transport errors
    #[error("http transport error: {0}")]
    Http(String),
    #[error("json-rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("malformed rpc response: {0}")]
    MalformedResponse(String),

    // Contract errors
    #[error("invalid contract address: {0}")]
    InvalidAddress(String),
    #[error("transaction {0} was not confirmed in time")]
    ReceiptTimeout(String),
    #[error("transaction {0} reverted")]
    TransactionReverted(String),
}

impl AppError {
    /// Wrap a rejected promise or thrown value from the injected provider.
    pub fn from_js(value: JsValue) -> Self {
        AppError::WalletRequest(describe_js_value(&value))
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        AppError::Http(err.to_string())
    }
}

/// Best-effort rendering of an arbitrary JS value for the diagnostic log.
/// Wallet rejections are plain objects with a `message` field; anything else
/// falls back to JSON or the debug representation.
pub fn describe_js_value(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(value, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
