//! # Palletize Core
//!
//! Greedy pallet packing and module slot assignment for warehouse loading.
//!
//! Items parsed from whitespace-delimited records are partitioned onto
//! fixed-capacity pallets (1100 mm width, 1000 kg weight) by a density-driven
//! greedy heuristic, and the packed pallets are then bound to named module
//! slots by a deterministic priority order.
//!
//! ## Core Components
//!
//! - [`Item`] — validated item record with the density scores that drive
//!   packing order
//! - [`ItemRegistry`] — owning item collection with all-or-nothing batch
//!   import
//! - [`Pallet`] — capacity-bounded container; [`pack`] produces them
//! - [`assign`] — binds pallets to [`Module`] slots by priority
//! - [`Warehouse`] — facade tying registry, packing, and assignment together
//! - [`PackingPlan`] — the resulting slot-to-item-ids mapping
//!
//! ## Example
//!
//! ```rust
//! use palletize_core::Warehouse;
//!
//! # fn main() -> palletize_core::Result<()> {
//! let mut warehouse = Warehouse::with_module_names(["A", "B", "C"]);
//! warehouse.import("1 400 200\n2 400 200\n3 500 300\n4 200 200\n5 500 300")?;
//!
//! let plan = warehouse.plan()?;
//! assert_eq!(plan.lines()[0], "A: 3,1,4");
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod assignment;
pub mod error;
pub mod item;
pub mod module;
pub mod packing;
pub mod pallet;
pub mod registry;
pub mod result;
pub mod warehouse;

// Re-exports
pub use assignment::{assign, SlotAssignment};
pub use error::{Error, ItemField, Result};
pub use item::{Item, ITEM_LENGTH};
pub use module::Module;
pub use packing::pack;
pub use pallet::Pallet;
pub use registry::ItemRegistry;
pub use result::{PackingPlan, PlanSummary};
pub use warehouse::Warehouse;
