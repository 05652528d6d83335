//! Edit Ingredient Form Component
//!
//! Rename a category, or change a sub-ingredient's name, base quantity
//! and unit.

use ingredient_lists_core::{
    format_quantity, parse_quantity, DialogEvent, IngredientId, IngredientPatch, ListId,
};
use leptos::prelude::*;

use super::{Modal, UnitSelect};
use crate::context::use_app_context;

#[component]
pub fn EditIngredientForm(list_id: ListId, ingredient_id: IngredientId) -> impl IntoView {
    let ctx = use_app_context();
    let on_close = Callback::new(move |_: ()| ctx.dispatch(DialogEvent::Cancel));

    let Some(original) = ctx.lists.with_untracked(|lists| {
        lists
            .list(&list_id)
            .and_then(|l| l.find_ingredient(&ingredient_id))
            .cloned()
    }) else {
        log::warn!("[APP] Edit target {} no longer exists", ingredient_id);
        return view! {
            <Modal title="Edit" on_close=on_close>
                <p>"This ingredient no longer exists."</p>
            </Modal>
        }
        .into_any();
    };

    let is_category = original.is_category();
    let name = RwSignal::new(original.name.clone());
    let quantity = RwSignal::new(format_quantity(original.base_quantity));
    let unit = RwSignal::new(original.base_unit.clone());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut patch = IngredientPatch {
            name: Some(name.get_untracked()),
            ..Default::default()
        };
        if !is_category {
            match parse_quantity(&quantity.get_untracked()) {
                Ok(q) => patch.base_quantity = Some(q),
                Err(e) => {
                    ctx.notify_error(e.to_string());
                    return;
                }
            }
            patch.base_unit = Some(unit.get_untracked());
        }
        if ctx
            .mutate(|lists| lists.edit_ingredient(&list_id, &ingredient_id, patch))
            .is_some()
        {
            ctx.dispatch(DialogEvent::Complete);
        }
    };

    let title = if is_category { "Edit Category" } else { "Edit Ingredient" };

    view! {
        <Modal title=title on_close=on_close>
            <form class="edit-form" on:submit=submit>
                <label>"Name"</label>
                <input
                    type="text"
                    autofocus=true
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <Show when=move || !is_category>
                    <label>"Quantity per person"</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                    <label>"Unit"</label>
                    <UnitSelect value=unit on_change=move |u: String| unit.set(u) />
                </Show>
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary-btn">"Save"</button>
                </div>
            </form>
        </Modal>
    }
    .into_any()
}
