//! Todo Master App
//!
//! Root component: wires the bridge-backed service and identity provider
//! into the view-model and session, then lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::commands::{self, BridgeIdentityProvider, BridgeTodoService};
use crate::components::{AuthHeader, NewTodoForm, NoticeToasts, StatsBar, TodoList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::query::{browser_sleep, ExponentialRetry, QueryDataSource};
use crate::service::TodoService;
use crate::session::SessionReflection;
use crate::view_model::{Listener, TodoViewModel};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    info!("[APP] network={:?} canister={:?}", config.network, config.canister_id);
    if let Err(e) = commands::configure(&config) {
        warn!("[APP] bridge not configured: {}", e);
    }

    let service: Rc<dyn TodoService> = Rc::new(BridgeTodoService::new());
    let source = Rc::new(QueryDataSource::new(
        service.clone(),
        Box::new(ExponentialRetry::from_config(&config)),
        browser_sleep(),
    ));
    let vm = TodoViewModel::new(service, source);
    let session = SessionReflection::new(Rc::new(BridgeIdentityProvider::new()));

    // Re-render trigger shared by both layers
    let (version, set_version) = signal(0u32);
    let bump: Listener = Rc::new(move || set_version.update(|v| *v = v.wrapping_add(1)));
    vm.subscribe(bump.clone());
    session.subscribe(bump);

    // Visible todos depend on the caller, so reload when it changes
    let reload_vm = vm.clone();
    session.on_identity_change(Rc::new(move || {
        let vm = reload_vm.clone();
        spawn_local(async move {
            vm.refresh().await;
        });
    }));

    provide_context(AppContext::new(vm.clone(), session, version));

    // Load todos on mount
    Effect::new(move |_| {
        let vm = vm.clone();
        spawn_local(async move {
            vm.mount().await;
        });
    });

    view! {
        <div class="container">
            <AuthHeader />

            <h1>"✨ Todo Master"</h1>
            <p class="subtitle">"Built on the Internet Computer"</p>

            <NewTodoForm />
            <StatsBar />
            <TodoList />

            <footer class="app-footer">
                <p class="hint">"Press Enter to quickly add a todo"</p>
            </footer>

            <NoticeToasts />
        </div>
    }
}
