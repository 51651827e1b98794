//! Bridge Command Wrappers
//!
//! Frontend bindings to the `window.todoBridge` object installed by the
//! host page, which owns the agent, the canister actor and the identity
//! client.

mod auth;
mod todo;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::ClientConfig;
use crate::error::ServiceError;

pub use auth::BridgeIdentityProvider;
pub use todo::BridgeTodoService;

const BRIDGE: &str = "todoBridge";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "todoBridge"], catch)]
    async fn call(method: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "todoBridge"], js_name = configure, catch)]
    fn bridge_configure(config: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "todoBridge"], js_name = login, catch)]
    async fn bridge_login() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "todoBridge"], js_name = logout, catch)]
    fn bridge_logout() -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "todoBridge"], js_name = principal, catch)]
    fn bridge_principal() -> Result<Option<String>, JsValue>;
}

/// Whether the host page installed the bridge
fn bridge_installed() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str(BRIDGE)).ok())
        .map(|bridge| !bridge.is_undefined() && !bridge.is_null())
        .unwrap_or(false)
}

/// Hand the build-time configuration to the bridge
pub fn configure(config: &ClientConfig) -> Result<(), ServiceError> {
    if !bridge_installed() {
        return Err(ServiceError::Unavailable);
    }
    let js_config = serde_wasm_bindgen::to_value(config).map_err(|e| ServiceError::Decode(e.to_string()))?;
    bridge_configure(js_config).map_err(|e| ServiceError::Transport(js_error_message(&e)))
}

/// Best-effort text of a thrown JS value
fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Rejections tagged `kind: "rejected"` come from the service itself;
/// anything else failed on the way.
fn to_service_error(err: JsValue) -> ServiceError {
    let kind = js_sys::Reflect::get(&err, &JsValue::from_str("kind"))
        .ok()
        .and_then(|k| k.as_string());
    let message = js_error_message(&err);
    match kind.as_deref() {
        Some("rejected") => ServiceError::Rejected(message),
        _ => ServiceError::Transport(message),
    }
}
