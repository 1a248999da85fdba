//! Slot assignment of packed pallets to modules.

use std::cmp::Reverse;

use crate::error::{Error, Result};
use crate::module::Module;
use crate::pallet::Pallet;

/// One module's share of the packing result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotAssignment {
    /// Name of the receiving module.
    pub module: String,
    /// Assigned item ids in display order; empty when the pallet pool was
    /// exhausted before this module's turn.
    pub item_ids: Vec<u32>,
}

/// Binds each pallet to a module slot.
///
/// Modules are visited in name-ascending order. Each module takes, from the
/// still-unassigned pallets, the winner of the priority order: descending
/// total width, then descending total weight, then descending item count,
/// then ascending minimum contained item id. Ids are unique, so the selection
/// is fully deterministic. Modules beyond the pallet count receive an empty
/// assignment.
///
/// # Errors
///
/// Fails with [`Error::InsufficientModules`] when there are more pallets than
/// modules; no partial assignment is produced.
pub fn assign(modules: &[Module], pallets: Vec<Pallet>) -> Result<Vec<SlotAssignment>> {
    if modules.len() < pallets.len() {
        return Err(Error::InsufficientModules {
            modules: modules.len(),
            pallets: pallets.len(),
        });
    }

    let mut ordered: Vec<&Module> = modules.iter().collect();
    ordered.sort();

    let mut pool = pallets;
    let mut assignments = Vec::with_capacity(ordered.len());

    for module in ordered {
        let winner = pool
            .iter()
            .enumerate()
            .max_by_key(|(_, pallet)| {
                (
                    pallet.total_width(),
                    pallet.total_weight(),
                    pallet.item_count(),
                    Reverse(pallet.min_item_id().unwrap_or(u32::MAX)),
                )
            })
            .map(|(index, _)| index);

        let item_ids = match winner {
            Some(index) => pool.swap_remove(index).display_ids(),
            None => Vec::new(),
        };

        assignments.push(SlotAssignment {
            module: module.name().to_string(),
            item_ids,
        });
    }

    Ok(assignments)
}
