//! List Selector Component
//!
//! Every saved list with its counts, plus the list-level actions:
//! create (typed or spoken), select, export, delete, clear all, reset.

use ingredient_lists_core::{DeleteTarget, DialogEvent, ListId, VoiceTarget};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::print;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ListSummary {
    id: ListId,
    name: String,
    ingredient_count: usize,
    number_of_people: u32,
}

fn people_label(n: u32) -> String {
    if n == 1 {
        "1 person".to_string()
    } else {
        format!("{} people", n)
    }
}

#[component]
pub fn ListSelector() -> impl IntoView {
    let ctx = use_app_context();

    let summaries = Memo::new(move |_| {
        ctx.lists.with(|lists| {
            lists
                .lists()
                .iter()
                .map(|l| ListSummary {
                    id: l.id.clone(),
                    name: l.name.clone(),
                    ingredient_count: l.sub_ingredient_count(),
                    number_of_people: l.number_of_people,
                })
                .collect::<Vec<_>>()
        })
    });
    let has_lists = move || !summaries.with(|s| s.is_empty());

    // Exporting a list also makes it the active one
    let download = move |id: ListId| {
        if ctx.mutate(|lists| lists.select_list(&id)).is_none() {
            return;
        }
        let rows_per_page = ctx.config.with_value(|c| c.export_rows_per_page);
        let result = ctx
            .lists
            .with_untracked(|lists| print::export_list(lists, &id, rows_per_page));
        if let Err(e) = result {
            log::error!("[EXPORT] {}", e);
            ctx.notify_error(e);
        }
    };

    view! {
        <section class="list-selector">
            <div class="section-header">
                <h2>"Your Lists"</h2>
                <div class="section-actions">
                    <button class="primary-btn" on:click=move |_| ctx.dispatch(DialogEvent::OpenCreateList)>
                        "+ New List"
                    </button>
                    <button
                        class="voice-btn"
                        title="Create list by voice"
                        on:click=move |_| ctx.dispatch(DialogEvent::StartVoice(VoiceTarget::NewList))
                    >
                        "🎤"
                    </button>
                    <Show when=has_lists>
                        <button
                            class="danger-btn"
                            on:click=move |_| ctx.dispatch(DialogEvent::RequestDelete(DeleteTarget::AllLists))
                        >
                            "Clear All"
                        </button>
                    </Show>
                    <button
                        class="danger-btn"
                        on:click=move |_| ctx.dispatch(DialogEvent::RequestDelete(DeleteTarget::ResetApp))
                    >
                        "Reset App"
                    </button>
                </div>
            </div>

            <Show
                when=has_lists
                fallback=|| view! { <p class="empty-hint">"No lists yet."</p> }
            >
                <ul class="list-cards">
                    <For
                        each=move || summaries.get()
                        key=|summary| summary.clone()
                        children=move |summary| {
                            let select_id = summary.id.clone();
                            let pdf_id = summary.id.clone();
                            let delete_id = summary.id.clone();
                            let active_id = summary.id.clone();
                            let is_active = move || ctx.active_list_id().as_ref() == Some(&active_id);

                            view! {
                                <li
                                    class=move || if is_active() { "list-card active" } else { "list-card" }
                                    on:click=move |_| {
                                        ctx.mutate(|lists| lists.select_list(&select_id));
                                    }
                                >
                                    <div class="list-card-text">
                                        <span class="list-name">{summary.name.clone()}</span>
                                        <span class="list-meta">
                                            {format!(
                                                "{} ingredients · {}",
                                                summary.ingredient_count,
                                                people_label(summary.number_of_people),
                                            )}
                                        </span>
                                    </div>
                                    <button
                                        class="pdf-btn"
                                        title="Download PDF"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            download(pdf_id.clone());
                                        }
                                    >
                                        "PDF"
                                    </button>
                                    <button
                                        class="delete-btn"
                                        title="Delete list"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            ctx.dispatch(DialogEvent::RequestDelete(DeleteTarget::List(
                                                delete_id.clone(),
                                            )));
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
