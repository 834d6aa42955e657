//! UI Components
//!
//! Leptos components making up the todo view.

mod todo_view;
mod new_item_form;
mod todo_item;

pub use todo_view::TodoView;
pub use new_item_form::NewItemForm;
pub use todo_item::TodoItem;
