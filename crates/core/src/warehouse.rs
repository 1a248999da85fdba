//! Warehouse facade.

use crate::assignment::assign;
use crate::error::{Error, Result};
use crate::item::Item;
use crate::module::Module;
use crate::packing::pack;
use crate::registry::ItemRegistry;
use crate::result::PackingPlan;

/// A warehouse with a fixed set of module slots and an item registry.
///
/// This is the surface the presentation layer talks to: feed it raw record
/// text with [`Warehouse::import`], then compute a [`PackingPlan`] with
/// [`Warehouse::plan`].
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    modules: Vec<Module>,
    registry: ItemRegistry,
}

impl Warehouse {
    /// Creates a warehouse with the given module slots.
    pub fn new(modules: Vec<Module>) -> Self {
        Self {
            modules,
            registry: ItemRegistry::new(),
        }
    }

    /// Creates a warehouse from module names.
    pub fn with_module_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Module::new).collect())
    }

    /// Imports a block of item records into the registry.
    ///
    /// Empty (or whitespace-only) input is a no-op. Returns the number of
    /// items added.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NoModules`] before any parsing when the warehouse
    /// has no module configured; input that is empty or whitespace-only never
    /// reaches that check and succeeds even on a module-less warehouse.
    /// Otherwise propagates registry import errors, leaving the registry
    /// unchanged on failure.
    pub fn import(&mut self, raw: &str) -> Result<usize> {
        if raw.trim().is_empty() {
            return Ok(0);
        }
        if self.modules.is_empty() {
            return Err(Error::NoModules);
        }

        self.registry.import(raw)
    }

    /// Packs all registered items and assigns the pallets to module slots.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InsufficientModules`] when packing produces more
    /// pallets than there are modules.
    pub fn plan(&self) -> Result<PackingPlan> {
        let pallets = pack(self.registry.items())?;
        let assignments = assign(&self.modules, pallets.clone())?;

        Ok(PackingPlan::new(&pallets, assignments))
    }

    /// Returns the configured modules in insertion order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Returns the registered items in import order.
    pub fn items(&self) -> &[Item] {
        self.registry.items()
    }

    /// Returns the item registry.
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }
}
