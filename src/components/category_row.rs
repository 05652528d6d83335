//! Category Row Component
//!
//! One category with expand/collapse, its actions, and its
//! sub-ingredients at the scaled quantity.

use ingredient_lists_core::{
    compute_display_quantity, format_quantity, DeleteTarget, DialogEvent, IngredientId, ListId,
    VoiceTarget,
};
use leptos::prelude::*;

use super::InlineDeleteButton;
use crate::context::use_app_context;
use crate::store::{store_reset_draft, store_toggle_expanded, ViewStateStoreFields};

#[derive(Clone, Debug, PartialEq)]
struct SubRow {
    id: IngredientId,
    name: String,
    quantity: f64,
    unit: String,
}

#[derive(Clone, Debug, PartialEq)]
struct CategoryData {
    list_id: ListId,
    name: String,
    subs: Vec<SubRow>,
}

#[component]
pub fn CategoryRow(category_id: IngredientId) -> impl IntoView {
    let ctx = use_app_context();

    let data = {
        let category_id = category_id.clone();
        Memo::new(move |_| {
            ctx.lists.with(|lists| {
                let list = lists.active_list()?;
                let category = list.find_category(&category_id)?;
                let subs = list
                    .sub_ingredients_of(&category_id)
                    .map(|s| SubRow {
                        id: s.id.clone(),
                        name: s.name.clone(),
                        quantity: compute_display_quantity(s, list.number_of_people),
                        unit: s.base_unit.clone(),
                    })
                    .collect();
                Some(CategoryData {
                    list_id: list.id.clone(),
                    name: category.name.clone(),
                    subs,
                })
            })
        })
    };
    let expanded = {
        let category_id = category_id.clone();
        move || ctx.view.expanded().with(|e| e.contains(&category_id))
    };

    let toggle = {
        let category_id = category_id.clone();
        move |_: web_sys::MouseEvent| store_toggle_expanded(&ctx.view, &category_id)
    };

    move || {
        let Some(CategoryData { list_id, name, subs }) = data.get() else {
            return ().into_any();
        };
        let count = subs.len();
        let is_open = expanded();
        let parent_id = category_id.clone();

        let add_sub = {
            let (list_id, parent_id) = (list_id.clone(), parent_id.clone());
            move |_: web_sys::MouseEvent| {
                let default_unit = ctx.config.with_value(|c| c.default_unit.clone());
                store_reset_draft(&ctx.view, &default_unit);
                ctx.dispatch(DialogEvent::OpenAddSubIngredient {
                    list_id: list_id.clone(),
                    parent_id: parent_id.clone(),
                });
            }
        };
        let voice_sub = {
            let (list_id, parent_id) = (list_id.clone(), parent_id.clone());
            move |_: web_sys::MouseEvent| {
                ctx.dispatch(DialogEvent::StartVoice(VoiceTarget::SubIngredient {
                    list_id: list_id.clone(),
                    parent_id: parent_id.clone(),
                }))
            }
        };
        let edit = {
            let (list_id, ingredient_id) = (list_id.clone(), parent_id.clone());
            move |_: web_sys::MouseEvent| {
                ctx.dispatch(DialogEvent::OpenEdit {
                    list_id: list_id.clone(),
                    ingredient_id: ingredient_id.clone(),
                })
            }
        };
        let delete = {
            let (list_id, ingredient_id) = (list_id.clone(), parent_id.clone());
            move |_: web_sys::MouseEvent| {
                ctx.dispatch(DialogEvent::RequestDelete(DeleteTarget::Ingredient {
                    list_id: list_id.clone(),
                    ingredient_id: ingredient_id.clone(),
                }))
            }
        };

        let sub_rows = is_open.then(|| {
            subs.into_iter()
                .map(|sub| sub_row(list_id.clone(), sub))
                .collect_view()
        });

        view! {
            <li class="category">
                <div class="category-header">
                    <button class="expand-btn" aria-expanded=is_open.to_string() on:click=toggle.clone()>
                        {if is_open { "▾" } else { "▸" }}
                    </button>
                    <span class="category-name">{name}</span>
                    <span class="category-count">{format!("({})", count)}</span>
                    <div class="row-actions">
                        <button title="Add ingredient" on:click=add_sub>"+"</button>
                        <button class="voice-btn" title="Add ingredient by voice" on:click=voice_sub>
                            "🎤"
                        </button>
                        <button title="Edit category" on:click=edit>"✎"</button>
                        <button class="delete-btn" title="Delete category" on:click=delete>"×"</button>
                    </div>
                </div>
                {sub_rows.map(|rows| view! { <ul class="sub-ingredients">{rows}</ul> })}
            </li>
        }
        .into_any()
    }
}

fn sub_row(list_id: ListId, sub: SubRow) -> impl IntoView {
    let ctx = use_app_context();
    let edit = {
        let (list_id, ingredient_id) = (list_id.clone(), sub.id.clone());
        move |_: web_sys::MouseEvent| {
            ctx.dispatch(DialogEvent::OpenEdit {
                list_id: list_id.clone(),
                ingredient_id: ingredient_id.clone(),
            })
        }
    };
    let on_delete = {
        let ingredient_id = sub.id.clone();
        move |_: ()| {
            ctx.mutate(|lists| lists.delete_ingredient(&list_id, &ingredient_id));
        }
    };

    let sub_name = sub.name.clone();

    view! {
        <li class="sub-ingredient">
            <span class="sub-name">{sub.name.clone()}</span>
            <span class="sub-quantity">{format!("{} {}", format_quantity(sub.quantity), sub.unit)}</span>
            <div class="row-actions">
                <button title="Edit ingredient" on:click=edit>"✎"</button>
                <InlineDeleteButton item_name=sub_name on_confirm=on_delete />
            </div>
        </li>
    }
}
