//! Auth Commands
//!
//! Identity provider backed by the bridge's auth client.

use std::cell::Cell;

use async_trait::async_trait;
use log::warn;

use super::{bridge_installed, bridge_login, bridge_logout, bridge_principal, js_error_message};
use crate::error::AuthError;
use crate::models::Principal;
use crate::service::IdentityProvider;

#[derive(Default)]
pub struct BridgeIdentityProvider {
    authenticating: Cell<bool>,
}

impl BridgeIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for BridgeIdentityProvider {
    async fn login(&self) -> Result<(), AuthError> {
        if !bridge_installed() {
            return Err(AuthError::Unavailable);
        }
        self.authenticating.set(true);
        let result = bridge_login().await;
        self.authenticating.set(false);
        result
            .map(|_| ())
            .map_err(|e| AuthError::Handshake(js_error_message(&e)))
    }

    fn logout(&self) {
        if !bridge_installed() {
            return;
        }
        if let Err(e) = bridge_logout() {
            warn!("[AUTH] logout failed: {}", js_error_message(&e));
        }
    }

    fn current_identity(&self) -> Option<Principal> {
        if !bridge_installed() {
            return None;
        }
        match bridge_principal() {
            Ok(principal) => principal.filter(|p| !p.is_empty()).map(Principal),
            Err(e) => {
                warn!("[AUTH] principal lookup failed: {}", js_error_message(&e));
                None
            }
        }
    }

    fn is_authenticating(&self) -> bool {
        self.authenticating.get()
    }
}
