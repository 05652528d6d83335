//! View State Store
//!
//! UI-only state (open dialog, notice, expanded categories, form draft)
//! held in a reactive_stores store for field-level reactivity. List data
//! lives in the core `ListStore` signal on `AppContext`.

use std::collections::HashSet;

use ingredient_lists_core::{Dialog, DialogEvent, IngredientId};
use leptos::prelude::*;
use reactive_stores::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown in the snackbar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Distinguishes repeated identical messages
    pub seq: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Sub-ingredient form fields, kept while dictation replaces the form
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct SubIngredientDraft {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl SubIngredientDraft {
    /// Blank name, one unit of the default unit per person
    pub fn fresh(default_unit: &str) -> Self {
        Self {
            name: String::new(),
            quantity: "1".to_string(),
            unit: default_unit.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    pub dialog: Dialog,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
    pub expanded: HashSet<IngredientId>,
    pub draft: SubIngredientDraft,
}

pub type ViewStore = Store<ViewState>;

pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Feed an event to the dialog state machine
pub fn store_dispatch(store: &ViewStore, event: DialogEvent) {
    store.dialog().update(|dialog| {
        *dialog = std::mem::take(dialog).next(event);
    });
}

pub fn store_notify(store: &ViewStore, kind: NoticeKind, message: String) {
    let seq = store.notice_seq().get_untracked() + 1;
    store.notice_seq().set(seq);
    store.notice().set(Some(Notice { seq, kind, message }));
}

/// Clear the notice unless a newer one replaced it
pub fn store_dismiss_notice(store: &ViewStore, seq: u64) {
    let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.seq));
    if current == Some(seq) {
        store.notice().set(None);
    }
}

pub fn store_toggle_expanded(store: &ViewStore, id: &IngredientId) {
    store.expanded().update(|expanded| {
        if !expanded.remove(id) {
            expanded.insert(id.clone());
        }
    });
}

pub fn store_reset_draft(store: &ViewStore, default_unit: &str) {
    store.draft().set(SubIngredientDraft::fresh(default_unit));
}
