//! Service Layer - Core Traits
//!
//! Abstract interfaces for the remote todo service and the identity
//! provider. The browser implementations live in `commands`; tests plug in
//! scripted fakes.

use async_trait::async_trait;

use crate::error::{AuthError, ServiceResult};
use crate::models::{Principal, TodoId, TodoItem};

/// Remote todo service: one read, four writes.
///
/// Futures are `?Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TodoService {
    /// All todos visible to the current caller, in service order
    async fn list_all(&self) -> ServiceResult<Vec<TodoItem>>;

    /// Create a todo, returning its new id
    async fn add(&self, text: &str) -> ServiceResult<TodoId>;

    /// Flip `completed`; `false` when the id is unknown to the caller
    async fn toggle(&self, id: TodoId) -> ServiceResult<bool>;

    /// Remove one todo; `false` when the id is unknown to the caller
    async fn delete(&self, id: TodoId) -> ServiceResult<bool>;

    /// Remove every completed todo, returning how many were removed
    async fn clear_completed(&self) -> ServiceResult<u64>;
}

/// Identity provider capability
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Run the login handshake to completion
    async fn login(&self) -> Result<(), AuthError>;

    fn logout(&self);

    fn current_identity(&self) -> Option<Principal>;

    /// True while a login handshake is pending
    fn is_authenticating(&self) -> bool;
}
