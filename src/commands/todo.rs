//! Todo Commands
//!
//! Bridge calls for the todo canister methods. Arguments are positional
//! JS arrays; naturals travel as decimal strings.

use async_trait::async_trait;
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{bridge_installed, call, to_service_error};
use crate::error::{ServiceError, ServiceResult};
use crate::models::{TodoId, TodoItem};
use crate::service::TodoService;

// ========================
// Method names
// ========================

const GET_ALL_TODOS: &str = "getAllTodos";
const ADD_TODO: &str = "addTodo";
const TOGGLE_TODO: &str = "toggleTodo";
const DELETE_TODO: &str = "deleteTodo";
const CLEAR_COMPLETED: &str = "clearCompleted";

/// [`TodoService`] backed by `window.todoBridge.call`
#[derive(Default)]
pub struct BridgeTodoService;

impl BridgeTodoService {
    pub fn new() -> Self {
        Self
    }

    async fn invoke(&self, method: &str, args: js_sys::Array) -> ServiceResult<JsValue> {
        if !bridge_installed() {
            return Err(ServiceError::Unavailable);
        }
        debug!("[BRIDGE] {}", method);
        call(method, args.into()).await.map_err(to_service_error)
    }
}

fn id_arg(id: TodoId) -> js_sys::Array {
    js_sys::Array::of1(&JsValue::from_str(&id.to_string()))
}

/// Natural returned as number, decimal string or BigInt
fn decode_nat(value: JsValue) -> ServiceResult<u64> {
    if let Some(n) = value.as_f64() {
        if n >= 0.0 && n.fract() == 0.0 {
            return Ok(n as u64);
        }
    }
    let text = if let Some(text) = value.as_string() {
        Some(text)
    } else {
        value
            .dyn_ref::<js_sys::BigInt>()
            .and_then(|big| big.to_string(10).ok())
            .map(String::from)
    };
    text.and_then(|t| t.trim().parse::<u64>().ok())
        .ok_or_else(|| ServiceError::Decode(format!("expected a natural, got {:?}", value)))
}

fn decode_bool(value: JsValue) -> ServiceResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| ServiceError::Decode(format!("expected a bool, got {:?}", value)))
}

#[async_trait(?Send)]
impl TodoService for BridgeTodoService {
    async fn list_all(&self) -> ServiceResult<Vec<TodoItem>> {
        let result = self.invoke(GET_ALL_TODOS, js_sys::Array::new()).await?;
        serde_wasm_bindgen::from_value(result).map_err(|e| ServiceError::Decode(e.to_string()))
    }

    async fn add(&self, text: &str) -> ServiceResult<TodoId> {
        let args = js_sys::Array::of1(&JsValue::from_str(text));
        let result = self.invoke(ADD_TODO, args).await?;
        decode_nat(result).map(TodoId)
    }

    async fn toggle(&self, id: TodoId) -> ServiceResult<bool> {
        let result = self.invoke(TOGGLE_TODO, id_arg(id)).await?;
        decode_bool(result)
    }

    async fn delete(&self, id: TodoId) -> ServiceResult<bool> {
        let result = self.invoke(DELETE_TODO, id_arg(id)).await?;
        decode_bool(result)
    }

    async fn clear_completed(&self) -> ServiceResult<u64> {
        let result = self.invoke(CLEAR_COMPLETED, js_sys::Array::new()).await?;
        decode_nat(result)
    }
}
