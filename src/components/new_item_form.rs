//! New Item Form Component
//!
//! Text input mirrored into the store plus a submit button.

use leptos::prelude::*;

use crate::store::{store_set_pending_name, store_submit, use_todo_store, TodoStateStoreFields};

/// `id` of the text input, also the target of its label
pub const NAME_INPUT_ID: &str = "todo-name";
/// Form field name of the text input
pub const NAME_INPUT_NAME: &str = "name";

/// Form for appending new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_todo_store();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = store_submit(&store);
        log::info!("[TODO] Added item {}", id);
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <label for=NAME_INPUT_ID class="visually-hidden">"New todo"</label>
            <input
                type="text"
                name=NAME_INPUT_NAME
                id=NAME_INPUT_ID
                autocomplete="off"
                placeholder="Add new item..."
                prop:value=move || store.pending_name().get()
                on:input=move |ev| store_set_pending_name(&store, event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
