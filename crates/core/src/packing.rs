//! Greedy pallet packing.
//!
//! A single-pass greedy heuristic, not an optimal solver. Each round opens a
//! fresh pallet, scans the remaining items once in descending
//! `density_by_weight` order, and admits every item that keeps the pallet
//! within both capacity bounds. Rejected items wait for a later round. There
//! is no backtracking and no re-balancing once a pallet is closed.

use crate::error::{Error, Result};
use crate::item::Item;
use crate::pallet::Pallet;

/// Partitions the items into an ordered list of pallets.
///
/// The returned pallets are disjoint and cover the input exactly. Items with
/// equal priority scores keep their input order (the sort is stable), which
/// makes the result deterministic for a given item sequence.
///
/// # Errors
///
/// Fails with [`Error::Internal`] if a round admits no item. Items validated
/// at construction are individually bounded by pallet capacity, so this can
/// only happen for item sets that bypassed validation.
pub fn pack(items: &[Item]) -> Result<Vec<Pallet>> {
    let mut remaining: Vec<Item> = items.to_vec();
    remaining.sort_by(|a, b| b.density_by_weight().total_cmp(&a.density_by_weight()));

    let mut pallets = Vec::new();
    while !remaining.is_empty() {
        let mut pallet = Pallet::new();
        let mut rejected = Vec::new();

        for item in remaining.drain(..) {
            if !pallet.try_admit(item) {
                rejected.push(item);
            }
        }

        if pallet.is_empty() {
            // Every remaining item failed to fit an empty pallet; looping
            // further would never terminate.
            return Err(Error::Internal(format!(
                "packing round admitted no item, {} items cannot fit an empty pallet",
                rejected.len()
            )));
        }

        log::debug!(
            "round {}: packed {} items ({} mm, {} kg), {} remaining",
            pallets.len() + 1,
            pallet.item_count(),
            pallet.total_width(),
            pallet.total_weight(),
            rejected.len()
        );

        pallets.push(pallet);
        remaining = rejected;
    }

    Ok(pallets)
}
