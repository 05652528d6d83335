//! Confirm Dialog Component
//!
//! Modal yes/no confirmation for destructive actions.

use leptos::prelude::*;

use super::Modal;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_cancel>
            <p class="confirm-message">{message}</p>
            <div class="modal-actions">
                <button class="cancel-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button class="danger-btn" on:click=move |_| on_confirm.run(())>{confirm_label}</button>
            </div>
        </Modal>
    }
}
