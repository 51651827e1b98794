//! Todo List Component
//!
//! Loading state, load error, rows and the empty state.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_app_context;
use crate::models::TodoItem;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    // Spinner only until the first snapshot lands
    let first_load = move || {
        ctx.track();
        let vm = ctx.vm();
        vm.snapshot().is_none() && vm.is_loading()
    };
    let todos = move || -> Vec<TodoItem> {
        ctx.track();
        ctx.vm().snapshot().map(|items| items.to_vec()).unwrap_or_default()
    };
    let is_empty = move || {
        ctx.track();
        ctx.vm().snapshot().is_some_and(|items| items.is_empty())
    };
    let load_error = move || {
        ctx.track();
        ctx.vm().load_error().map(|e| e.to_string())
    };

    view! {
        <Show
            when=move || !first_load()
            fallback=|| view! {
                <div class="loading-state">
                    <div class="spinner large" />
                    <p>"Loading your tasks..."</p>
                </div>
            }
        >
            {move || load_error().map(|message| view! {
                <p class="load-error">{message}</p>
            })}
            <ul class="todo-list">
                <For
                    each=todos
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
                <Show when=is_empty>
                    <li class="empty-state">
                        <span class="emoji">"📝"</span>
                        <p>"No tasks yet. Add one above!"</p>
                    </li>
                </Show>
            </ul>
        </Show>
    }
}
