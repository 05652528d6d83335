//! Sub-Ingredient Form Component
//!
//! Name, base quantity (per person) and unit for a new sub-ingredient.
//! Name and quantity can each be dictated; the draft survives the trip
//! through the voice dialog.

use ingredient_lists_core::{
    parse_quantity, DialogEvent, IngredientId, ListId, VoiceField, VoiceTarget,
};
use leptos::prelude::*;

use super::{Modal, UnitSelect};
use crate::context::use_app_context;
use crate::store::{store_reset_draft, SubIngredientDraftStoreFields, ViewStateStoreFields};

#[component]
pub fn SubIngredientForm(list_id: ListId, parent_id: IngredientId) -> impl IntoView {
    let ctx = use_app_context();
    let draft = ctx.view.draft();

    let category_name = ctx.lists.with_untracked(|lists| {
        lists
            .list(&list_id)
            .and_then(|l| l.find_category(&parent_id))
            .map(|c| c.name.clone())
            .unwrap_or_default()
    });

    let dictate = {
        let (list_id, parent_id) = (list_id.clone(), parent_id.clone());
        move |field: VoiceField| {
            ctx.dispatch(DialogEvent::StartVoice(VoiceTarget::SubIngredientField {
                list_id: list_id.clone(),
                parent_id: parent_id.clone(),
                field,
            }))
        }
    };
    let dictate_name = {
        let dictate = dictate.clone();
        move |_: web_sys::MouseEvent| dictate(VoiceField::Name)
    };
    let dictate_quantity = move |_: web_sys::MouseEvent| dictate(VoiceField::Quantity);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = draft.get_untracked();
        let quantity = match parse_quantity(&fields.quantity) {
            Ok(q) => q,
            Err(e) => {
                ctx.notify_error(e.to_string());
                return;
            }
        };
        let added = ctx.mutate(|lists| {
            lists.add_sub_ingredient(&list_id, &parent_id, &fields.name, quantity, &fields.unit)
        });
        if added.is_some() {
            ctx.view.expanded().update(|e| {
                e.insert(parent_id.clone());
            });
            let default_unit = ctx.config.with_value(|c| c.default_unit.clone());
            store_reset_draft(&ctx.view, &default_unit);
            ctx.notify_success(format!("Added {}", fields.name.trim()));
            ctx.dispatch(DialogEvent::Complete);
        }
    };

    let on_close = Callback::new(move |_: ()| ctx.dispatch(DialogEvent::Cancel));

    view! {
        <Modal title=format!("Add ingredient to {}", category_name) on_close=on_close>
            <form class="sub-ingredient-form" on:submit=submit>
                <label>"Name"</label>
                <div class="input-row">
                    <input
                        type="text"
                        autofocus=true
                        placeholder="e.g. Basmati rice"
                        prop:value=move || draft.name().get()
                        on:input=move |ev| draft.name().set(event_target_value(&ev))
                    />
                    <button type="button" class="voice-btn" title="Dictate name" on:click=dictate_name>
                        "🎤"
                    </button>
                </div>

                <label>"Quantity per person"</label>
                <div class="input-row">
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="e.g. 0.25"
                        prop:value=move || draft.quantity().get()
                        on:input=move |ev| draft.quantity().set(event_target_value(&ev))
                    />
                    <button type="button" class="voice-btn" title="Dictate quantity" on:click=dictate_quantity>
                        "🎤"
                    </button>
                </div>

                <label>"Unit"</label>
                <UnitSelect
                    value=Signal::derive(move || draft.unit().get())
                    on_change=move |unit: String| draft.unit().set(unit)
                />

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn">"Add"</button>
                </div>
            </form>
        </Modal>
    }
}
