//! Item registry and batch import.

use crate::error::{Error, Result};
use crate::item::Item;

/// Owning collection of validated items.
///
/// The registry is the source of truth for id uniqueness. Import is
/// all-or-nothing: a batch is staged and validated in full before anything is
/// committed, so a failed import leaves the registry exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
}

impl ItemRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and registers a block of records, one per line.
    ///
    /// Records are separated by `\n` or `\r`; empty and whitespace-only
    /// segments are skipped, so CRLF input and blank lines parse cleanly.
    /// Returns the number of items added.
    ///
    /// # Errors
    ///
    /// Fails with a field validation error for any record with an id, width,
    /// or weight below 1, and with [`Error::DuplicateId`] when a record reuses
    /// an id that is already registered or appears twice in the batch. On any
    /// error the registry is unchanged.
    pub fn import(&mut self, raw: &str) -> Result<usize> {
        let mut staged: Vec<Item> = Vec::new();

        for record in raw.split(['\n', '\r']) {
            if record.trim().is_empty() {
                continue;
            }

            let item = Item::from_record(record)?;
            let duplicate = self
                .items
                .iter()
                .chain(staged.iter())
                .any(|existing| existing.id() == item.id());
            if duplicate {
                return Err(Error::DuplicateId(item.id()));
            }

            staged.push(item);
        }

        let added = staged.len();
        self.items.append(&mut staged);
        log::debug!("imported {} items, registry holds {}", added, self.items.len());

        Ok(added)
    }

    /// Returns the registered items in import order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns true if an item with the given id is registered.
    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
