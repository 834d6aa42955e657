//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the list and the
//! input buffer are tracked separately, so typing does not re-render the list.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::Serialize;

use crate::error::TodoError;
use crate::logging::log_snapshot;
use crate::models::{append_item, seed_items, toggle_item, Item};

/// State owned by the todo view for as long as it is mounted
#[derive(Clone, Debug, Default, PartialEq, Serialize, Store)]
pub struct TodoState {
    /// Items in display order
    pub items: Vec<Item>,
    /// Text currently in the add-item input
    #[serde(rename = "pendingName")]
    pub pending_name: String,
}

impl TodoState {
    /// Fresh state holding the seed list and an empty input
    pub fn seeded() -> Self {
        Self {
            items: seed_items(),
            pending_name: String::new(),
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mirror the input's text into the store
pub fn store_set_pending_name(store: &TodoStore, name: String) {
    *store.pending_name().write() = name;
}

/// Submit the pending name as a new item, returning its id
pub fn store_submit(store: &TodoStore) -> String {
    let name = std::mem::take(&mut *store.pending_name().write());
    let id = append_item(&mut store.items().write(), name);
    store.with_untracked(log_snapshot);
    id
}

/// Flip the checked flag of item `id`, returning the new value
pub fn store_toggle_item(store: &TodoStore, id: &str) -> Result<bool, TodoError> {
    let checked = toggle_item(&mut store.items().write(), id)?;
    store.with_untracked(log_snapshot);
    Ok(checked)
}
