//! Module slots.

/// A named storage slot that receives at most one pallet's worth of items.
///
/// Modules carry no capacity semantics of their own; they are pure labels,
/// ordered lexicographically by name for deterministic slot iteration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    name: String,
}

impl Module {
    /// Creates a module with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the module name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
