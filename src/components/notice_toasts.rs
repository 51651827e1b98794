//! Notice Toasts Component
//!
//! Failure notices, each dismissed after `NOTICE_TIMEOUT` or on click.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTICE_TIMEOUT;
use crate::context::use_app_context;

#[component]
pub fn NoticeToasts() -> impl IntoView {
    let ctx = use_app_context();

    let notices = move || {
        ctx.track();
        ctx.vm().notices()
    };

    view! {
        <div class="toast-stack" role="status">
            <For
                each=notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        gloo_timers::future::sleep(NOTICE_TIMEOUT).await;
                        ctx.vm().dismiss_notice(id);
                    });
                    view! {
                        <div class="toast error" on:click=move |_| ctx.vm().dismiss_notice(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
