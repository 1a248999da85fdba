//! Error types for the palletize core.

use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

/// Item record field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemField {
    /// The item id (first field of a record).
    Id,
    /// The item width in millimeters (second field).
    Width,
    /// The item weight in kilograms (third field).
    Weight,
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Width => write!(f, "width"),
            Self::Weight => write!(f, "weight"),
        }
    }
}

/// Errors produced by importing, packing, and slot assignment.
///
/// Every failure is terminal for the whole run; there is no retry or
/// partial-result path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The warehouse has no module configured to receive data.
    #[error("warehouse has no module to insert data into, add a module first")]
    NoModules,

    /// A record reused an id that is already registered.
    #[error("duplicate item id {0}, item ids must be unique")]
    DuplicateId(u32),

    /// An id, width, or weight field was below 1 (missing and malformed
    /// numeric fields parse as 0 and end up here).
    #[error("item {field} must be 1 or greater, got {value}")]
    InvalidField {
        /// Which field was out of range.
        field: ItemField,
        /// The offending parsed value.
        value: u32,
    },

    /// A single item is wider or heavier than an empty pallet allows, so it
    /// could never be placed.
    #[error("item {id} ({width} mm, {weight} kg) exceeds pallet capacity")]
    ItemExceedsCapacity {
        /// Id of the oversized item.
        id: u32,
        /// Item width in millimeters.
        width: u32,
        /// Item weight in kilograms.
        weight: u32,
    },

    /// Packing produced more pallets than there are modules to hold them.
    #[error("not enough modules for pallets ({modules} modules, {pallets} pallets), add more modules to the warehouse")]
    InsufficientModules {
        /// Number of configured modules.
        modules: usize,
        /// Number of pallets produced by packing.
        pallets: usize,
    },

    /// Internal invariant violation.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_distinct() {
        let errors = [
            Error::NoModules,
            Error::DuplicateId(7),
            Error::InvalidField {
                field: ItemField::Width,
                value: 0,
            },
            Error::ItemExceedsCapacity {
                id: 3,
                width: 2000,
                weight: 10,
            },
            Error::InsufficientModules {
                modules: 2,
                pallets: 3,
            },
        ];

        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_field_display() {
        assert_eq!(ItemField::Id.to_string(), "id");
        assert_eq!(ItemField::Width.to_string(), "width");
        assert_eq!(ItemField::Weight.to_string(), "weight");
    }
}
