//! Snackbar Component
//!
//! Shows the current notice and hides it after the configured duration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{store_dismiss_notice, NoticeKind, ViewStateStoreFields};

#[component]
pub fn Snackbar() -> impl IntoView {
    let ctx = use_app_context();
    let duration_ms = ctx.config.with_value(|c| c.notice_duration_ms);

    Effect::new(move |_| {
        if let Some(notice) = ctx.view.notice().get() {
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                store_dismiss_notice(&ctx.view, notice.seq);
            });
        }
    });

    move || {
        ctx.view.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "snackbar success",
                NoticeKind::Error => "snackbar error",
            };
            let seq = notice.seq;
            view! {
                <div class=class role="status">
                    <span>{notice.message}</span>
                    <button
                        class="close-btn"
                        aria-label="Dismiss"
                        on:click=move |_| store_dismiss_notice(&ctx.view, seq)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
