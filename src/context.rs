//! Application Context
//!
//! Shared state provided via Leptos Context API.

use ingredient_lists_core::{
    AppConfig, Dialog, DialogEvent, ListId, ListStore, StoreResult,
};
use leptos::prelude::*;

use crate::storage::BrowserStorage;
use crate::store::{store_dispatch, store_notify, NoticeKind, ViewStateStoreFields, ViewStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Canonical list collection
    pub lists: RwSignal<ListStore>,
    /// Settings loaded at startup
    pub config: StoredValue<AppConfig>,
    /// UI-only state
    pub view: ViewStore,
}

impl AppContext {
    pub fn new(lists: ListStore, config: AppConfig, view: ViewStore) -> Self {
        Self {
            lists: RwSignal::new(lists),
            config: StoredValue::new(config),
            view,
        }
    }

    /// Run a store mutation, then persist
    ///
    /// Rejected mutations become an error notice and return None.
    pub fn mutate<T>(&self, op: impl FnOnce(&mut ListStore) -> StoreResult<T>) -> Option<T> {
        match self.lists.try_update(op)? {
            Ok(value) => {
                self.flush();
                Some(value)
            }
            Err(e) => {
                log::warn!("[APP] Rejected: {}", e);
                self.notify_error(e.to_string());
                None
            }
        }
    }

    /// Write the whole collection to browser storage
    pub fn flush(&self) {
        let key = self.config.with_value(|c| c.storage_key.clone());
        let result = self.lists.with_untracked(|lists| lists.flush(&BrowserStorage, &key));
        if let Err(e) = result {
            log::error!("[PERSIST] Failed to save lists: {}", e);
            self.notify_error("Could not save your lists. Changes may be lost on reload.");
        }
    }

    /// Clear all lists and every stored key
    pub fn reset_app(&self) {
        let key = self.config.with_value(|c| c.storage_key.clone());
        let result = self
            .lists
            .try_update(|lists| lists.reset_app(&BrowserStorage, &key));
        match result {
            Some(Err(e)) => {
                log::error!("[PERSIST] Reset failed: {}", e);
                self.notify_error("Reset failed to clear stored data.");
            }
            _ => self.notify_success("App reset successfully! All data has been cleared."),
        }
    }

    pub fn active_list_id(&self) -> Option<ListId> {
        self.lists.with(|lists| lists.active_list_id().cloned())
    }

    /// For event handlers
    pub fn active_list_id_untracked(&self) -> Option<ListId> {
        self.lists.with_untracked(|lists| lists.active_list_id().cloned())
    }

    pub fn dialog(&self) -> Dialog {
        self.view.dialog().get()
    }

    pub fn dispatch(&self, event: DialogEvent) {
        store_dispatch(&self.view, event);
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        store_notify(&self.view, NoticeKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        store_notify(&self.view, NoticeKind::Error, message.into());
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
