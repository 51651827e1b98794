//! New Todo Form Component
//!
//! Text input and submit button for adding todos.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let adding = move || {
        ctx.track();
        ctx.vm().is_adding()
    };

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let vm = ctx.vm();
        spawn_local(async move {
            vm.add().await;
        });
    };

    view! {
        <form class="input-container" on:submit=add_todo>
            <input
                type="text"
                placeholder="What needs to be done?"
                autofocus=true
                prop:value=move || {
                    ctx.track();
                    ctx.vm().input()
                }
                on:input=move |ev| ctx.vm().set_input(event_target_value(&ev))
                disabled=adding
            />
            <button
                type="submit"
                disabled=move || {
                    ctx.track();
                    !ctx.vm().can_add()
                }
            >
                <Show when=adding fallback=|| "Add">
                    <span class="spinner" />
                </Show>
            </button>
        </form>
    }
}
