//! Scaling Control Component
//!
//! People-count input for the active list. Only valid counts are
//! committed; invalid text reverts on blur.

use ingredient_lists_core::parse_people_count;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ScalingControl() -> impl IntoView {
    let ctx = use_app_context();

    let people = Memo::new(move |_| {
        ctx.lists
            .with(|lists| lists.active_list().map(|l| l.number_of_people).unwrap_or(1))
    });
    let (text, set_text) = signal(people.get_untracked().to_string());

    // Follow list switches and external changes
    Effect::new(move |_| set_text.set(people.get().to_string()));

    let commit = move |n: u32| {
        let Some(list_id) = ctx.active_list_id_untracked() else {
            return;
        };
        ctx.mutate(|lists| lists.set_number_of_people(&list_id, n));
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        if let Ok(n) = parse_people_count(&value) {
            commit(n);
        }
        set_text.set(value);
    };

    let on_blur = move |_: web_sys::FocusEvent| {
        if parse_people_count(&text.get_untracked()).is_err() {
            set_text.set(people.get_untracked().to_string());
        }
    };

    let step = move |delta: i64| {
        let next = i64::from(people.get_untracked()) + delta;
        if let Ok(n) = u32::try_from(next) {
            if n >= 1 {
                commit(n);
            }
        }
    };

    view! {
        <section class="scaling-control">
            <label for="people-count">"Number of people"</label>
            <div class="stepper">
                <button
                    aria-label="Fewer people"
                    disabled=move || people.get() <= 1
                    on:click=move |_| step(-1)
                >
                    "−"
                </button>
                <input
                    id="people-count"
                    type="number"
                    min="1"
                    inputmode="numeric"
                    prop:value=move || text.get()
                    on:input=on_input
                    on:blur=on_blur
                />
                <button aria-label="More people" on:click=move |_| step(1)>
                    "+"
                </button>
            </div>
            <p class="scaling-hint">
                {move || format!("Quantities are scaled for {} people.", people.get())}
            </p>
        </section>
    }
}
