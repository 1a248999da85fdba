//! Packing plan representation.

use crate::assignment::SlotAssignment;
use crate::pallet::Pallet;

/// Result of packing a warehouse's items and assigning them to modules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackingPlan {
    /// Per-module assignments in module-name-ascending order.
    pub assignments: Vec<SlotAssignment>,

    /// Number of pallets produced by packing.
    pub pallets_used: usize,

    /// Total number of items packed.
    pub total_items: usize,

    /// Packed width over available width across all pallets (0.0 - 1.0).
    pub width_utilization: f64,

    /// Packed weight over available weight across all pallets (0.0 - 1.0).
    pub weight_utilization: f64,
}

impl PackingPlan {
    /// Builds a plan from the produced pallets and their assignments.
    pub(crate) fn new(pallets: &[Pallet], assignments: Vec<SlotAssignment>) -> Self {
        let total_items = pallets.iter().map(Pallet::item_count).sum();
        let packed_width: u32 = pallets.iter().map(Pallet::total_width).sum();
        let packed_weight: u32 = pallets.iter().map(Pallet::total_weight).sum();
        let capacity = pallets.len() as f64;

        let (width_utilization, weight_utilization) = if pallets.is_empty() {
            (0.0, 0.0)
        } else {
            (
                f64::from(packed_width) / (capacity * f64::from(Pallet::MAX_WIDTH)),
                f64::from(packed_weight) / (capacity * f64::from(Pallet::MAX_WEIGHT)),
            )
        };

        Self {
            assignments,
            pallets_used: pallets.len(),
            total_items,
            width_utilization,
            weight_utilization,
        }
    }

    /// Returns true if every module received at least one item.
    pub fn all_modules_filled(&self) -> bool {
        self.assignments.iter().all(|a| !a.item_ids.is_empty())
    }

    /// Renders the external representation, one `Name: id1,id2,...` line per
    /// module in name order. A module without a pallet renders an empty list.
    pub fn lines(&self) -> Vec<String> {
        self.assignments
            .iter()
            .map(|assignment| {
                let ids: Vec<String> =
                    assignment.item_ids.iter().map(u32::to_string).collect();
                format!("{}: {}", assignment.module, ids.join(","))
            })
            .collect()
    }
}

/// Compact summary of a packing plan.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSummary {
    /// Number of modules configured.
    pub modules: usize,
    /// Number of pallets produced.
    pub pallets_used: usize,
    /// Total items packed.
    pub total_items: usize,
    /// Width utilization percentage.
    pub width_utilization_percent: f64,
    /// Weight utilization percentage.
    pub weight_utilization_percent: f64,
}

impl From<&PackingPlan> for PlanSummary {
    fn from(plan: &PackingPlan) -> Self {
        Self {
            modules: plan.assignments.len(),
            pallets_used: plan.pallets_used,
            total_items: plan.total_items,
            width_utilization_percent: plan.width_utilization * 100.0,
            weight_utilization_percent: plan.weight_utilization * 100.0,
        }
    }
}
