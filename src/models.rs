//! Frontend Models
//!
//! Todo item data and the pure operations over the item list.

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Prefix for generated item ids
pub const ID_PREFIX: &str = "todo-00";

/// Todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_checked: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_checked,
        }
    }

    /// DOM id of the item's checkbox, shared with its label's `for`
    pub fn checkbox_id(&self) -> String {
        format!("checkbox-{}", self.id)
    }
}

/// The three items every fresh list starts with
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new("todo-001", "Apples", false),
        Item::new("todo-002", "Bananies", true),
        Item::new("todo-003", "Avocåëdos", false),
    ]
}

/// Id for the item appended after `count` existing items.
///
/// The number is not zero-padded, so counts of 9 and above give ids like
/// `todo-0010` that no longer match the seed pattern.
pub fn next_item_id(count: usize) -> String {
    format!("{}{}", ID_PREFIX, count + 1)
}

/// Append an unchecked item named `name`, returning its id
pub fn append_item(items: &mut Vec<Item>, name: String) -> String {
    let id = next_item_id(items.len());
    items.push(Item::new(id.clone(), name, false));
    id
}

/// Flip `is_checked` on the first item with `id`, returning the new value
pub fn toggle_item(items: &mut [Item], id: &str) -> Result<bool, TodoError> {
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| TodoError::UnknownItem { id: id.to_string() })?;
    item.is_checked = !item.is_checked;
    Ok(item.is_checked)
}

/// (checked, total)
pub fn progress(items: &[Item]) -> (usize, usize) {
    let checked = items.iter().filter(|item| item.is_checked).count();
    (checked, items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_items() {
        let items = seed_items();
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        let checked: Vec<_> = items.iter().map(|i| i.is_checked).collect();

        assert_eq!(ids, ["todo-001", "todo-002", "todo-003"]);
        assert_eq!(names, ["Apples", "Bananies", "Avocåëdos"]);
        assert_eq!(checked, [false, true, false]);
    }

    #[test]
    fn test_next_item_id() {
        assert_eq!(next_item_id(0), "todo-001");
        assert_eq!(next_item_id(3), "todo-004");
        assert_eq!(next_item_id(8), "todo-009");
        // Not padded past a single digit
        assert_eq!(next_item_id(9), "todo-0010");
        assert_eq!(next_item_id(99), "todo-00100");
    }

    #[test]
    fn test_append_item() {
        let mut items = seed_items();
        let id = append_item(&mut items, "Milk".to_string());

        assert_eq!(id, "todo-004");
        assert_eq!(items.len(), 4);
        assert_eq!(items[3], Item::new("todo-004", "Milk", false));
        assert_eq!(&items[..3], &seed_items()[..]);
    }

    #[test]
    fn test_append_duplicate_names() {
        let mut items = seed_items();
        append_item(&mut items, "Apples".to_string());

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, items[3].name);
        assert_ne!(items[0].id, items[3].id);
    }

    #[test]
    fn test_toggle_item() {
        let mut items = seed_items();

        assert_eq!(toggle_item(&mut items, "todo-002"), Ok(false));
        assert!(!items[1].is_checked);
        assert!(!items[0].is_checked);
        assert!(!items[2].is_checked);

        assert_eq!(toggle_item(&mut items, "todo-002"), Ok(true));
        assert_eq!(items, seed_items());
    }

    #[test]
    fn test_toggle_unknown_item() {
        let mut items = seed_items();
        let err = toggle_item(&mut items, "todo-042").unwrap_err();

        assert_eq!(err, TodoError::UnknownItem { id: "todo-042".to_string() });
        assert_eq!(items, seed_items());
    }

    #[test]
    fn test_checkbox_id() {
        let item = Item::new("todo-001", "Apples", false);
        assert_eq!(item.checkbox_id(), "checkbox-todo-001");
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(&seed_items()), (1, 3));
        assert_eq!(progress(&[]), (0, 0));
    }

    #[test]
    fn test_item_serializes_checked_flag() {
        let json = serde_json::to_string(&Item::new("todo-001", "Apples", true)).unwrap();
        assert_eq!(json, r#"{"id":"todo-001","name":"Apples","isChecked":true}"#);
    }
}
