//! Name Dialog Component
//!
//! Single-field dialog for naming a new list or category, with a
//! hand-over to voice input.

use leptos::prelude::*;

use super::Modal;

#[component]
pub fn NameDialog(
    #[prop(into)] title: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into)] on_voice: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = name.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        on_submit.run(value);
    };

    view! {
        <Modal title=title on_close=on_cancel>
            <form class="name-form" on:submit=submit>
                <div class="input-row">
                    <input
                        type="text"
                        autofocus=true
                        placeholder=placeholder
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="voice-btn"
                        title="Use voice input"
                        on:click=move |_| on_voice.run(())
                    >
                        "🎤"
                    </button>
                </div>
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="primary-btn"
                        disabled=move || name.with(|n| n.trim().is_empty())
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
