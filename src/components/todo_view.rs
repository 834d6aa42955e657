//! Todo View Component
//!
//! Owns the todo store for its lifetime and renders the heading, the
//! add-item form and the checkable list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewItemForm, TodoItem};
use crate::models::progress;
use crate::store::{TodoState, TodoStateStoreFields};

/// Heading shown above the form
pub const HEADING: &str = "My todo list";

#[component]
pub fn TodoView() -> impl IntoView {
    let state = TodoState::seeded();
    log::info!("[TODO] Mounting with {} seed items", state.items.len());
    let store = Store::new(state);

    // Children reach the store through context
    provide_context(store);

    // Index is part of the key since ids are not guaranteed unique past 9 items
    let rows = move || store.items().get().into_iter().enumerate().collect::<Vec<_>>();

    let summary = move || {
        store.items().with(|items| {
            let (checked, total) = progress(items);
            format!("{} of {} done", checked, total)
        })
    };

    view! {
        <h1>{HEADING}</h1>

        <NewItemForm />

        <ul class="todo-list">
            <For
                each=rows
                key=|(index, item)| (*index, item.id.clone(), item.is_checked)
                children=move |(_, item)| view! { <TodoItem item=item /> }
            />
        </ul>

        <p class="item-count">{summary}</p>
    }
}
