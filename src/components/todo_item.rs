//! Todo Item Component
//!
//! One checkbox row in the list.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_toggle_item, use_todo_store};

/// A single list entry: checkbox plus label
#[component]
pub fn TodoItem(item: Item) -> impl IntoView {
    let store = use_todo_store();

    let checkbox_id = item.checkbox_id();
    let is_checked = item.is_checked;
    let id = item.id;

    let on_change = move |_: web_sys::Event| match store_toggle_item(&store, &id) {
        Ok(checked) => log::debug!("[TODO] {} checked={}", id, checked),
        Err(err) => {
            // The id came from rendering the current list, so this is a bug
            log::error!("[TODO] toggle failed: {}", err);
            panic!("todo list invariant violated: {}", err);
        }
    };

    view! {
        <li class=if is_checked { "todo-item checked" } else { "todo-item" }>
            <input
                type="checkbox"
                id=checkbox_id.clone()
                checked=is_checked
                on:change=on_change
            />
            <label for=checkbox_id>{item.name}</label>
        </li>
    }
}
