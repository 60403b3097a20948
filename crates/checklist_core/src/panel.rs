//! Host-facing checklist panel controller.
//!
//! # Responsibility
//! - Expose render views and input hooks to the host UI.
//! - Route structural edits (add/remove) through the edit queue.
//! - Map host focus/close lifecycle onto store reload/save.
//!
//! # Invariants
//! - `render` never mutates the checklist.
//! - Add/remove take effect only at the next `update` tick.
//! - Toggle/edit keep the list length and apply in the same frame.
//! - Empty new-entry text never produces a queued edit.
//! - A failed save on close keeps the in-memory list for a retry.

use crate::config::ChecklistConfig;
use crate::model::checklist::{Checklist, ChecklistView};
use crate::model::item::ItemId;
use crate::prefs::PreferenceStore;
use crate::queue::EditQueue;
use crate::store::{ChecklistStore, StoreResult};
use crate::text::{is_blank_entry, strip_newlines};
use log::{debug, info};

/// One open checklist panel.
pub struct ChecklistPanel<P: PreferenceStore> {
    store: ChecklistStore<P>,
    edits: EditQueue<Checklist>,
    draft: String,
}

impl<P: PreferenceStore> ChecklistPanel<P> {
    /// Opens a panel and loads its checklist.
    pub fn open(prefs: P, config: ChecklistConfig) -> StoreResult<Self> {
        let store = ChecklistStore::open(prefs, config)?;
        info!(
            "event=panel_open module=panel status=ok key={} items={}",
            store.key(),
            store.checklist().len()
        );
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: ChecklistStore<P>) -> Self {
        Self {
            store,
            edits: EditQueue::new(),
            draft: String::new(),
        }
    }

    /// Render tick: read-only snapshot of both partitions.
    pub fn render(&self) -> ChecklistView {
        self.store.checklist().view()
    }

    /// Flips an item's completion flag immediately.
    pub fn on_toggle(&mut self, id: ItemId) -> Option<bool> {
        self.store.checklist_mut().toggle_complete(id)
    }

    /// Replaces an item's text immediately. Empty text is accepted.
    pub fn on_edit(&mut self, id: ItemId, text: impl Into<String>) -> bool {
        self.store.checklist_mut().edit_item(id, text)
    }

    /// Queues removal of one item instance.
    pub fn on_remove(&mut self, id: ItemId) {
        debug!("event=edit_queued module=panel kind=remove");
        self.edits.enqueue(move |list: &mut Checklist| {
            list.remove_item(id);
        });
    }

    /// Queues a new item built from `text` with newlines removed.
    ///
    /// Returns `false` and queues nothing when the text is empty.
    pub fn on_add_requested(&mut self, text: &str) -> bool {
        if is_blank_entry(text) {
            return false;
        }
        let text = strip_newlines(text);
        debug!("event=edit_queued module=panel kind=add");
        self.edits.enqueue(move |list: &mut Checklist| {
            list.add_item(text);
        });
        true
    }

    /// Sets the new-entry field, dropping any newlines.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = strip_newlines(text);
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Queues the draft as a new item and clears the field.
    ///
    /// An empty draft is left as is and nothing is queued.
    pub fn submit_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.draft);
        let queued = self.on_add_requested(&draft);
        if !queued {
            self.draft = draft;
        }
        queued
    }

    /// Update tick: applies queued edits in FIFO order.
    pub fn update(&mut self) -> usize {
        let applied = self.edits.drain(self.store.checklist_mut());
        if applied > 0 {
            debug!(
                "event=edits_applied module=panel count={applied} items={}",
                self.store.checklist().len()
            );
        }
        applied
    }

    pub fn pending_edits(&self) -> usize {
        self.edits.len()
    }

    /// Host gave the panel focus: pick up the persisted list.
    pub fn focus_gained(&mut self) -> StoreResult<bool> {
        self.store.reload()
    }

    /// Host took focus away: persist the current list.
    pub fn focus_lost(&self) -> StoreResult<()> {
        self.store.save()
    }

    /// Closes the panel, applying pending edits before the final save.
    ///
    /// Borrows the panel so a failed save leaves the list in place; the
    /// host drops the panel only once this returns `Ok`.
    pub fn close(&mut self) -> StoreResult<()> {
        self.update();
        self.store.save()?;
        info!("event=panel_close module=panel status=ok key={}", self.store.key());
        Ok(())
    }

    pub fn checklist(&self) -> &Checklist {
        self.store.checklist()
    }

    pub fn store(&self) -> &ChecklistStore<P> {
        &self.store
    }
}
