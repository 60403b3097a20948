//! Checklist domain model.
//!
//! # Responsibility
//! - Define the item record and the ordered checklist that owns it.
//! - Define the blob format used as the unit of persistence.
//!
//! # Invariants
//! - Every item is in exactly one of the active/complete partitions.
//! - Item identity is per-load; the blob stores content only.

pub mod checklist;
pub mod item;
