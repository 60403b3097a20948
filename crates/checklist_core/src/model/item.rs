//! Checklist item model.
//!
//! # Responsibility
//! - Define the single entry shape persisted inside a checklist blob.
//! - Provide the toggle/display helpers used by render views.
//!
//! # Invariants
//! - `id` is an in-process instance identity; it is never persisted and a
//!   fresh one is assigned on every load.
//! - Equality compares content (`complete`, `text`) only. Use
//!   `same_instance` when identity matters.

use crate::text::strike_through;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Instance identity of one item within a loaded checklist.
///
/// Two items may carry identical text; edits always target an `ItemId`.
pub type ItemId = Uuid;

/// One checklist entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: ItemId,
    /// Completion flag; partitions the item into the active or complete view.
    #[serde(default)]
    pub complete: bool,
    /// User-visible label. May be empty after an edit.
    #[serde(default)]
    pub text: String,
}

impl Item {
    /// Creates an active item with a fresh identity.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_state(false, text)
    }

    /// Creates an item with an explicit completion flag.
    pub fn with_state(complete: bool, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            complete,
            text: text.into(),
        }
    }

    /// Returns whether this item belongs to the active view.
    pub fn is_active(&self) -> bool {
        !self.complete
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.complete = !self.complete;
        self.complete
    }

    /// Text as the host should draw it: struck through once complete.
    pub fn display_text(&self) -> String {
        if self.complete {
            strike_through(&self.text)
        } else {
            self.text.clone()
        }
    }

    /// Returns whether both values are the same loaded instance.
    pub fn same_instance(&self, other: &Item) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.complete == other.complete && self.text == other.text
    }
}

impl Eq for Item {}

#[cfg(test)]
mod tests {
    use super::Item;

    #[test]
    fn new_item_is_active() {
        let item = Item::new("write tests");
        assert!(!item.complete);
        assert!(item.is_active());
        assert!(!item.id.is_nil());
    }

    #[test]
    fn toggle_returns_new_state() {
        let mut item = Item::new("x");
        assert!(item.toggle());
        assert!(!item.is_active());
        assert!(!item.toggle());
    }

    #[test]
    fn equal_text_is_not_same_instance() {
        let first = Item::new("dup");
        let second = Item::new("dup");
        assert_eq!(first, second);
        assert!(!first.same_instance(&second));
        assert!(first.same_instance(&first.clone()));
    }

    #[test]
    fn display_text_strikes_complete_items_only() {
        let mut item = Item::new("ok");
        assert_eq!(item.display_text(), "ok");
        item.toggle();
        assert_eq!(item.display_text(), "o\u{0336}k\u{0336}");
    }
}
