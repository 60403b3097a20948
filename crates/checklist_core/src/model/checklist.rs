//! Ordered checklist collection and its persisted blob format.
//!
//! # Responsibility
//! - Own the ordered item sequence and the item-level mutations.
//! - Derive the active/complete partitions handed to render passes.
//! - Convert the sequence to and from the single preference blob.
//!
//! # Invariants
//! - Insertion order is the only order; nothing sorts items.
//! - Partitions are derived from `Item::complete`, never stored separately.
//! - Mutations address items by `ItemId`, never by text.
//! - Malformed blobs are reported with the raw text, never silently reset.

use crate::model::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Envelope field holding the item array in persisted blobs.
const LIST_FIELD: &str = "list";

/// Errors from converting a checklist to or from its blob.
#[derive(Debug)]
pub enum BlobError {
    /// Encoding the in-memory list failed.
    Serialization(serde_json::Error),
    /// The persisted blob could not be decoded. Carries the raw text so the
    /// caller can surface or back it up instead of losing it.
    Deserialization {
        raw: String,
        source: serde_json::Error,
    },
}

impl Display for BlobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(err) => write!(f, "failed to encode checklist: {err}"),
            Self::Deserialization { raw, source } => write!(
                f,
                "malformed checklist blob ({} bytes): {source}",
                raw.len()
            ),
        }
    }
}

impl Error for BlobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::Deserialization { source, .. } => Some(source),
        }
    }
}

#[derive(Serialize)]
struct BlobEnvelope<'a> {
    list: &'a [Item],
}

/// Ordered list of checklist items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<Item>,
}

/// Read-only snapshot of one item for a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: ItemId,
    pub text: String,
    /// `text` with strike overlay applied when complete.
    pub display_text: String,
    pub complete: bool,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            display_text: item.display_text(),
            complete: item.complete,
        }
    }
}

/// Both partitions of a checklist, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistView {
    pub active: Vec<ItemView>,
    pub complete: Vec<ItemView>,
}

impl ChecklistView {
    /// Texts of the active partition, in order.
    pub fn active_texts(&self) -> Vec<&str> {
        self.active.iter().map(|view| view.text.as_str()).collect()
    }

    /// Texts of the complete partition, in order.
    pub fn complete_texts(&self) -> Vec<&str> {
        self.complete.iter().map(|view| view.text.as_str()).collect()
    }

    /// Rows in host draw order: active first, then complete.
    pub fn rows(&self) -> impl Iterator<Item = &ItemView> {
        self.active.iter().chain(self.complete.iter())
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.complete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// First-run list: one active item with `text`.
    pub fn sample(text: impl Into<String>) -> Self {
        Self::from_items(vec![Item::new(text)])
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Appends a new active item and returns it.
    ///
    /// # Contract
    /// - Callers reject empty text before calling; this method does not.
    pub fn add_item(&mut self, text: impl Into<String>) -> &Item {
        self.items.push(Item::new(text));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Removes the item with `id`.
    ///
    /// Returns `None` without touching the list when the id is not present,
    /// so a repeated removal is a no-op.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Flips the completion flag of `id`, returning the new value.
    pub fn toggle_complete(&mut self, id: ItemId) -> Option<bool> {
        self.get_mut(id).map(Item::toggle)
    }

    /// Replaces the text of `id`. Empty text is allowed here.
    pub fn edit_item(&mut self, id: ItemId, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Active items in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_active())
    }

    /// Complete items in insertion order.
    pub fn complete(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.complete)
    }

    /// Owned snapshot of both partitions for one render pass.
    pub fn view(&self) -> ChecklistView {
        ChecklistView {
            active: self.active().map(ItemView::from).collect(),
            complete: self.complete().map(ItemView::from).collect(),
        }
    }

    /// Encodes the list as `{"list":[{"complete":..,"text":..},..]}`.
    pub fn to_blob(&self) -> Result<String, BlobError> {
        serde_json::to_string(&BlobEnvelope { list: &self.items })
            .map_err(BlobError::Serialization)
    }

    /// Decodes a persisted blob.
    ///
    /// Accepts the `{"list":[..]}` envelope and a bare item array. Missing
    /// item fields fall back to `complete=false` / `text=""`. Fresh item ids
    /// are assigned.
    ///
    /// # Errors
    /// - `BlobError::Deserialization` for invalid JSON or any other shape.
    pub fn from_blob(raw: &str) -> Result<Self, BlobError> {
        let malformed = |source: serde_json::Error| BlobError::Deserialization {
            raw: raw.to_string(),
            source,
        };

        let value: Value = serde_json::from_str(raw).map_err(malformed)?;
        let list = match value {
            Value::Object(mut fields) => match fields.remove(LIST_FIELD) {
                Some(list) => list,
                None => {
                    return Err(malformed(serde::de::Error::custom(
                        "checklist envelope is missing the `list` field",
                    )))
                }
            },
            array @ Value::Array(_) => array,
            _ => {
                return Err(malformed(serde::de::Error::custom(
                    "expected a checklist envelope object or item array",
                )))
            }
        };

        let items = Vec::<Item>::deserialize(list).map_err(malformed)?;
        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::{BlobError, Checklist};

    #[test]
    fn add_appends_in_insertion_order() {
        let mut list = Checklist::new();
        list.add_item("a");
        list.add_item("b");
        let texts: Vec<_> = list.items().iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);
    }

    #[test]
    fn edit_missing_item_returns_false() {
        let mut list = Checklist::sample("x");
        let id = list.items()[0].id;
        list.remove_item(id);
        assert!(!list.edit_item(id, "y"));
        assert_eq!(list.toggle_complete(id), None);
    }

    #[test]
    fn envelope_without_list_is_malformed() {
        let err = Checklist::from_blob("{}").unwrap_err();
        match err {
            BlobError::Deserialization { raw, .. } => assert_eq!(raw, "{}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scalar_blob_is_malformed() {
        assert!(matches!(
            Checklist::from_blob("42"),
            Err(BlobError::Deserialization { .. })
        ));
    }
}
