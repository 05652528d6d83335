//! Dialog Host Component
//!
//! Renders whichever dialog the state machine says is open and turns
//! dialog results into store operations.

use ingredient_lists_core::{
    format_quantity, parse_quantity, parse_sub_ingredient, DeleteTarget, Dialog, DialogEvent,
    VoiceField, VoiceResult, VoiceTarget,
};
use leptos::prelude::*;

use super::{ConfirmDialog, EditIngredientForm, NameDialog, SubIngredientForm, VoiceInputModal};
use crate::context::{use_app_context, AppContext};
use crate::store::{SubIngredientDraftStoreFields, ViewStateStoreFields};

#[component]
pub fn DialogHost() -> impl IntoView {
    let ctx = use_app_context();
    let cancel = Callback::new(move |_: ()| ctx.dispatch(DialogEvent::Cancel));

    move || match ctx.dialog() {
        Dialog::Idle => ().into_any(),

        Dialog::CreatingList => view! {
            <NameDialog
                title="Create New List"
                placeholder="List name"
                submit_label="Create"
                on_submit=move |name: String| create_list(ctx, &name)
                on_voice=move |_: ()| ctx.dispatch(DialogEvent::StartVoice(VoiceTarget::NewList))
                on_cancel=cancel
            />
        }
        .into_any(),

        Dialog::CreatingCategory { list_id } => {
            let voice_list_id = list_id.clone();
            view! {
                <NameDialog
                    title="Add Category"
                    placeholder="Category name (e.g. Vegetables)"
                    submit_label="Add"
                    on_submit=move |name: String| {
                        let added = ctx.mutate(|lists| lists.add_category(&list_id, &name));
                        if added.is_some() {
                            ctx.notify_success(format!("Category \"{}\" added", name.trim()));
                            ctx.dispatch(DialogEvent::Complete);
                        }
                    }
                    on_voice=move |_: ()| {
                        ctx.dispatch(DialogEvent::StartVoice(VoiceTarget::Category {
                            list_id: voice_list_id.clone(),
                        }))
                    }
                    on_cancel=cancel
                />
            }
            .into_any()
        }

        Dialog::AddingSubIngredient { list_id, parent_id } => {
            view! { <SubIngredientForm list_id=list_id parent_id=parent_id /> }.into_any()
        }

        Dialog::VoiceCapturing(target) => {
            let result_target = target.clone();
            view! {
                <VoiceInputModal
                    target=target
                    on_result=move |result: VoiceResult| apply_voice_result(ctx, &result_target, result)
                    on_cancel=cancel
                />
            }
            .into_any()
        }

        Dialog::Editing { list_id, ingredient_id } => view! {
            <EditIngredientForm list_id=list_id ingredient_id=ingredient_id />
        }
        .into_any(),

        Dialog::ConfirmingDelete(target) => {
            let (title, message, confirm_label) = describe_delete(ctx, &target);
            view! {
                <ConfirmDialog
                    title=title
                    message=message
                    confirm_label=confirm_label
                    on_confirm=move |_: ()| confirm_delete(ctx, &target)
                    on_cancel=cancel
                />
            }
            .into_any()
        }
    }
}

fn create_list(ctx: AppContext, name: &str) {
    let created = ctx.mutate(|lists| lists.create_list(name).map(|l| l.name.clone()));
    if let Some(name) = created {
        ctx.notify_success(format!("List \"{}\" created successfully!", name));
        ctx.dispatch(DialogEvent::Complete);
    }
}

/// Create or fill whatever the capture was for, then close it
fn apply_voice_result(ctx: AppContext, target: &VoiceTarget, result: VoiceResult) {
    let Some(text) = result.candidate() else {
        return;
    };
    log::info!("[VOICE] Heard {:?} ({})", text, result.language_tag);

    match target {
        VoiceTarget::NewList => create_list(ctx, &text),
        VoiceTarget::Category { list_id } => {
            if ctx.mutate(|lists| lists.add_category(list_id, &text)).is_some() {
                ctx.notify_success(format!("Category \"{}\" added", text));
                ctx.dispatch(DialogEvent::Complete);
            }
        }
        VoiceTarget::SubIngredient { list_id, parent_id } => {
            let parsed = ctx.config.with_value(|config| parse_sub_ingredient(&text, config));
            let added = ctx.mutate(|lists| {
                lists.add_sub_ingredient(list_id, parent_id, &parsed.name, parsed.quantity, &parsed.unit)
            });
            if added.is_some() {
                ctx.view.expanded().update(|e| {
                    e.insert(parent_id.clone());
                });
                ctx.notify_success(format!(
                    "Added {} {} {}",
                    format_quantity(parsed.quantity),
                    parsed.unit,
                    parsed.name
                ));
                ctx.dispatch(DialogEvent::Complete);
            }
        }
        VoiceTarget::SubIngredientField { field: VoiceField::Name, .. } => {
            ctx.view.draft().name().set(text);
            ctx.dispatch(DialogEvent::Complete);
        }
        VoiceTarget::SubIngredientField { field: VoiceField::Quantity, .. } => {
            match parse_quantity(&text) {
                Ok(q) => ctx.view.draft().quantity().set(format_quantity(q)),
                Err(e) => ctx.notify_error(e.to_string()),
            }
            ctx.dispatch(DialogEvent::Complete);
        }
    }
}

fn describe_delete(ctx: AppContext, target: &DeleteTarget) -> (String, String, String) {
    match target {
        DeleteTarget::List(id) => {
            let name = ctx.lists.with_untracked(|lists| {
                lists.list(id).map(|l| l.name.clone()).unwrap_or_default()
            });
            (
                "Delete List".to_string(),
                format!("Delete \"{}\" and all of its ingredients?", name),
                "Delete".to_string(),
            )
        }
        DeleteTarget::AllLists => (
            "Clear All Lists".to_string(),
            "Delete every list? This cannot be undone.".to_string(),
            "Clear All".to_string(),
        ),
        DeleteTarget::ResetApp => (
            "Reset App".to_string(),
            "Delete all lists and stored settings? This cannot be undone.".to_string(),
            "Reset".to_string(),
        ),
        DeleteTarget::Ingredient { list_id, ingredient_id } => {
            let message = ctx.lists.with_untracked(|lists| {
                let list = lists.list(list_id)?;
                let ingredient = list.find_ingredient(ingredient_id)?;
                Some(if ingredient.is_category() {
                    let count = list.sub_ingredients_of(ingredient_id).count();
                    format!(
                        "Delete category \"{}\" and its {} ingredients?",
                        ingredient.name, count
                    )
                } else {
                    format!("Delete \"{}\"?", ingredient.name)
                })
            });
            (
                "Delete Ingredient".to_string(),
                message.unwrap_or_else(|| "Delete this ingredient?".to_string()),
                "Delete".to_string(),
            )
        }
    }
}

fn confirm_delete(ctx: AppContext, target: &DeleteTarget) {
    match target {
        DeleteTarget::List(id) => {
            if ctx.mutate(|lists| Ok(lists.delete_list(id))) == Some(true) {
                ctx.notify_success("List deleted successfully!");
            }
        }
        DeleteTarget::AllLists => {
            ctx.mutate(|lists| {
                lists.clear_all_lists();
                Ok(())
            });
            ctx.view.expanded().set(Default::default());
            ctx.notify_success("All lists cleared successfully!");
        }
        DeleteTarget::ResetApp => {
            ctx.reset_app();
            ctx.view.expanded().set(Default::default());
        }
        DeleteTarget::Ingredient { list_id, ingredient_id } => {
            if let Some(removed) = ctx.mutate(|lists| lists.delete_ingredient(list_id, ingredient_id)) {
                ctx.view.expanded().update(|e| {
                    e.remove(ingredient_id);
                });
                log::info!("[APP] Removed {} ingredients", removed);
            }
        }
    }
    ctx.dispatch(DialogEvent::Complete);
}
