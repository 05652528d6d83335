//! Ingredient List Component
//!
//! The active list: header actions and one row per category.

use ingredient_lists_core::{DialogEvent, VoiceTarget};
use leptos::prelude::*;

use super::CategoryRow;
use crate::context::use_app_context;
use crate::print;

#[component]
pub fn IngredientListView() -> impl IntoView {
    let ctx = use_app_context();

    let title = Memo::new(move |_| {
        ctx.lists
            .with(|lists| lists.active_list().map(|l| l.name.clone()).unwrap_or_default())
    });
    let categories = Memo::new(move |_| {
        ctx.lists.with(|lists| {
            lists
                .active_list()
                .map(|l| l.categories().map(|c| c.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let add_category = move |_: web_sys::MouseEvent| {
        if let Some(list_id) = ctx.active_list_id_untracked() {
            ctx.dispatch(DialogEvent::OpenCreateCategory { list_id });
        }
    };
    let voice_category = move |_: web_sys::MouseEvent| {
        if let Some(list_id) = ctx.active_list_id_untracked() {
            ctx.dispatch(DialogEvent::StartVoice(VoiceTarget::Category { list_id }));
        }
    };
    let export = move |_: web_sys::MouseEvent| {
        let Some(list_id) = ctx.active_list_id_untracked() else {
            return;
        };
        let rows_per_page = ctx.config.with_value(|c| c.export_rows_per_page);
        let result = ctx
            .lists
            .with_untracked(|lists| print::export_list(lists, &list_id, rows_per_page));
        if let Err(e) = result {
            log::error!("[EXPORT] {}", e);
            ctx.notify_error(e);
        }
    };

    view! {
        <section class="ingredient-list">
            <div class="section-header">
                <h2>{move || title.get()}</h2>
                <div class="section-actions">
                    <button class="primary-btn" on:click=add_category>"+ Category"</button>
                    <button class="voice-btn" title="Add category by voice" on:click=voice_category>
                        "🎤"
                    </button>
                    <button class="secondary-btn" on:click=export>"Export PDF"</button>
                </div>
            </div>

            <Show
                when=move || !categories.with(|c| c.is_empty())
                fallback=|| view! {
                    <p class="empty-hint">"No ingredients yet. Add your first ingredient!"</p>
                }
            >
                <ul class="categories">
                    <For
                        each=move || categories.get()
                        key=|id| id.clone()
                        children=move |id| view! { <CategoryRow category_id=id /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
