//! Fixed-capacity pallets.

use crate::item::Item;

/// A capacity-bounded container of items.
///
/// The only way to put an item on a pallet is [`Pallet::try_admit`], so every
/// pallet satisfies `total_width <= MAX_WIDTH` and `total_weight <=
/// MAX_WEIGHT` at all times. Items are stored in admission order; the
/// presentation order is computed separately by [`Pallet::display_ids`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pallet {
    items: Vec<Item>,
    total_width: u32,
    total_weight: u32,
}

impl Pallet {
    /// Pallet width budget in millimeters.
    pub const MAX_WIDTH: u32 = 1100;

    /// Pallet length in millimeters (informational, matches the item length).
    pub const LENGTH: u32 = 1100;

    /// Pallet weight budget in kilograms.
    pub const MAX_WEIGHT: u32 = 1000;

    /// Creates an empty pallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits the item if both capacity bounds stay satisfied.
    ///
    /// Returns whether the item was admitted; a rejected item leaves the
    /// pallet untouched.
    pub fn try_admit(&mut self, item: Item) -> bool {
        let width = self.total_width + item.width();
        let weight = self.total_weight + item.weight();

        if width > Self::MAX_WIDTH || weight > Self::MAX_WEIGHT {
            return false;
        }

        self.total_width = width;
        self.total_weight = weight;
        self.items.push(item);
        true
    }

    /// Returns the items in admission order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of item widths in millimeters.
    pub fn total_width(&self) -> u32 {
        self.total_width
    }

    /// Sum of item weights in kilograms.
    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Number of items on the pallet.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the pallet holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Smallest item id on the pallet, if any.
    ///
    /// Used as the final assignment tie-break; ids are unique across a
    /// registry, so this makes pallet selection fully deterministic.
    pub fn min_item_id(&self) -> Option<u32> {
        self.items.iter().map(Item::id).min()
    }

    /// Item ids in display order: descending width, then descending weight,
    /// then ascending id.
    pub fn display_ids(&self) -> Vec<u32> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by(|a, b| {
            b.width()
                .cmp(&a.width())
                .then(b.weight().cmp(&a.weight()))
                .then(a.id().cmp(&b.id()))
        });
        items.into_iter().map(Item::id).collect()
    }
}
