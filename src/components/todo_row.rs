//! Todo Row Component
//!
//! One todo with its toggle and delete buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::TodoItem;

/// A single todo row; controls are disabled while any list mutation runs
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let completed = todo.completed;
    let busy = move || {
        ctx.track();
        ctx.vm().is_busy()
    };

    let row_class = move || {
        let mut c = String::from("todo-item");
        if completed { c.push_str(" completed"); }
        if busy() { c.push_str(" busy"); }
        c
    };

    view! {
        <li class=row_class>
            <button
                class="btn-checkbox"
                title=if completed { "Mark as active" } else { "Mark as completed" }
                disabled=busy
                on:click=move |_| {
                    let vm = ctx.vm();
                    spawn_local(async move {
                        vm.toggle(id).await;
                    });
                }
            >
                {if completed { "✓" } else { "" }}
            </button>
            <span class="text">{todo.text}</span>
            <button
                class="btn-icon btn-delete"
                title="Delete todo"
                disabled=busy
                on:click=move |_| {
                    let vm = ctx.vm();
                    spawn_local(async move {
                        vm.delete(id).await;
                    });
                }
            >
                "✕"
            </button>
        </li>
    }
}
