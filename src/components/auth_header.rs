//! Auth Header Component
//!
//! Login status, short principal and login/logout controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn AuthHeader() -> impl IntoView {
    let ctx = use_app_context();

    let authenticated = move || {
        ctx.track();
        ctx.session().is_authenticated()
    };
    let authenticating = move || {
        ctx.track();
        ctx.session().is_authenticating()
    };

    let login = move |_| {
        let session = ctx.session();
        spawn_local(async move {
            session.login().await;
        });
    };

    view! {
        <header class="auth-header">
            <Show
                when=authenticated
                fallback=move || view! {
                    <div class="user-info">
                        <span class="status-dot offline" />
                        <span>"Guest Mode"</span>
                    </div>
                    <button
                        class="btn-primary btn-sm"
                        disabled=authenticating
                        on:click=login
                    >
                        {move || if authenticating() { "Connecting..." } else { "Login with II" }}
                    </button>
                }
            >
                <div class="user-info">
                    <span class="status-dot online" />
                    <span class="principal">
                        {move || {
                            ctx.track();
                            ctx.session().short_principal().unwrap_or_default()
                        }}
                    </span>
                </div>
                <button class="btn-secondary btn-sm" on:click=move |_| ctx.session().logout()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
