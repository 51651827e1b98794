//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::session::SessionReflection;
use crate::view_model::TodoViewModel;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    vm: StoredValue<TodoViewModel, LocalStorage>,
    session: StoredValue<SessionReflection, LocalStorage>,
    /// Bumped by view-model and session listeners - read
    version: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(vm: TodoViewModel, session: SessionReflection, version: ReadSignal<u32>) -> Self {
        Self {
            vm: StoredValue::new_local(vm),
            session: StoredValue::new_local(session),
            version,
        }
    }

    pub fn vm(&self) -> TodoViewModel {
        self.vm.get_value()
    }

    pub fn session(&self) -> SessionReflection {
        self.session.get_value()
    }

    /// Subscribe the calling reactive scope to state changes
    pub fn track(&self) {
        self.version.track();
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
