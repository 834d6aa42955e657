//! Todo List App
//!
//! Page shell. The document head (charset, title) lives in `index.html`;
//! the body holds exactly one todo view.

use leptos::prelude::*;

use crate::components::TodoView;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <TodoView />
    }
}
