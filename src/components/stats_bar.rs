//! Stats Bar Component
//!
//! Active/completed counters and the clear-completed control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::view_model::InFlight;

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_app_context();

    let stats = move || {
        ctx.track();
        ctx.vm().stats()
    };
    let clearing = move || {
        ctx.track();
        ctx.vm().in_flight() == InFlight::Clearing
    };

    let clear_completed = move |_| {
        let vm = ctx.vm();
        spawn_local(async move {
            vm.clear_completed().await;
        });
    };

    view! {
        <Show when=move || { stats().total > 0 }>
            <div class="stats-bar">
                <span class="stat">
                    <strong>{move || stats().active}</strong>" active"
                </span>
                <span class="stat">
                    <strong>{move || stats().completed}</strong>" completed"
                </span>
                <Show when=move || { stats().completed > 0 }>
                    <button class="btn-clear" disabled=clearing on:click=clear_completed>
                        {move || if clearing() { "Clearing..." } else { "Clear Completed" }}
                    </button>
                </Show>
            </div>
        </Show>
    }
}
