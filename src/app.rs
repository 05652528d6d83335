//! Voice Ingredient List Manager App
//!
//! Root component: list selector on top, then scaling and the active list.

use ingredient_lists_core::{AppConfig, ListStore, SystemClock};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    DialogHost, IngredientListView, ListSelector, LogPanel, ScalingControl, Snackbar,
};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::ViewState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let lists = ListStore::init(&BrowserStorage, &config.storage_key, SystemClock);
    log::info!("[APP] Loaded {} lists", lists.lists().len());

    let view_store = Store::new(ViewState::default());
    provide_context(view_store);
    let ctx = AppContext::new(lists, config, view_store);
    provide_context(ctx);

    let has_active = move || ctx.lists.with(|lists| lists.active_list().is_some());

    view! {
        <header class="app-bar">
            <h1>"Voice Ingredient List Manager"</h1>
        </header>
        <main class="app-layout">
            <ListSelector />
            <Show
                when=has_active
                fallback=|| view! {
                    <p class="empty-hint">"Create a list to get started."</p>
                }
            >
                <ScalingControl />
                <IngredientListView />
            </Show>
        </main>
        <LogPanel />
        <DialogHost />
        <Snackbar />
    }
}
