//! Session Reflection
//!
//! Read-only view of the identity provider for the header, plus the login
//! and logout entry points.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};

use crate::error::AuthError;
use crate::models::Principal;
use crate::service::IdentityProvider;
use crate::view_model::Listener;

/// What became of a login request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Already authenticated or a handshake is pending
    Ignored,
    Authenticated,
    Failed(AuthError),
}

struct SessionInner {
    provider: Rc<dyn IdentityProvider>,
    authenticating: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
    identity_listeners: RefCell<Vec<Listener>>,
}

#[derive(Clone)]
pub struct SessionReflection {
    inner: Rc<SessionInner>,
}

impl SessionReflection {
    pub fn new(provider: Rc<dyn IdentityProvider>) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                provider,
                authenticating: Cell::new(false),
                listeners: RefCell::new(Vec::new()),
                identity_listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Called after any change to the flag or the identity
    pub fn subscribe(&self, listener: Listener) {
        self.inner.listeners.borrow_mut().push(listener);
    }

    /// Called once each time the caller identity changes
    pub fn on_identity_change(&self, listener: Listener) {
        self.inner.identity_listeners.borrow_mut().push(listener);
    }

    fn notify(&self, identity_changed: bool) {
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
        if identity_changed {
            let listeners = self.inner.identity_listeners.borrow().clone();
            for listener in listeners {
                listener();
            }
        }
    }

    pub fn identity(&self) -> Option<Principal> {
        self.inner.provider.current_identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        self.inner.authenticating.get() || self.inner.provider.is_authenticating()
    }

    /// Header rendering of the principal
    pub fn short_principal(&self) -> Option<String> {
        self.identity().map(|p| p.short())
    }

    pub async fn login(&self) -> LoginOutcome {
        if self.is_authenticating() || self.is_authenticated() {
            return LoginOutcome::Ignored;
        }
        self.inner.authenticating.set(true);
        self.notify(false);

        let result = self.inner.provider.login().await;
        self.inner.authenticating.set(false);

        match result {
            Ok(()) => {
                let identity = self.identity();
                info!("[AUTH] logged in as {:?}", identity.as_ref().map(Principal::as_str));
                self.notify(identity.is_some());
                LoginOutcome::Authenticated
            }
            Err(err) => {
                warn!("[AUTH] {}", err);
                self.notify(false);
                LoginOutcome::Failed(err)
            }
        }
    }

    pub fn logout(&self) {
        let had_identity = self.is_authenticated();
        self.inner.provider.logout();
        info!("[AUTH] logged out");
        self.notify(had_identity);
    }
}
