//! Inline Delete Component
//!
//! Two-step delete for a single sub-ingredient row. The confirmation
//! names the ingredient and falls back to the × button if left alone.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the confirmation stays armed
const ARMED_MS: u32 = 4_000;

fn confirm_prompt(item_name: &str) -> String {
    match item_name.trim() {
        "" => "Remove?".to_string(),
        name => format!("Remove {}?", name),
    }
}

/// × button that arms into "Remove <name>?" with ✓/✗
#[component]
pub fn InlineDeleteButton(
    #[prop(into)] item_name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    // Bumped on every arm so a stale timer never disarms a newer confirmation
    let armed_at = RwSignal::new(None::<u32>);
    let arms = StoredValue::new(0u32);
    let prompt = confirm_prompt(&item_name);
    let label = format!("Delete {}", item_name.trim());

    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let generation = arms.get_value() + 1;
        arms.set_value(generation);
        armed_at.set(Some(generation));
        spawn_local(async move {
            TimeoutFuture::new(ARMED_MS).await;
            if armed_at.get_untracked() == Some(generation) {
                armed_at.set(None);
            }
        });
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed_at.set(None);
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        armed_at.set(None);
    };

    move || {
        if armed_at.get().is_some() {
            view! {
                <span class="delete-confirm" role="group">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" title="Remove" on:click=confirm>"✓"</button>
                    <button class="cancel-btn" title="Keep" on:click=cancel>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" title=label.clone() aria-label=label.clone() on:click=arm>
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
