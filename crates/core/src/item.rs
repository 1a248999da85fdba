//! Item records.

use crate::error::{Error, ItemField, Result};
use crate::pallet::Pallet;

/// Fixed item length in millimeters.
///
/// Every item shares the pallet footprint length; it plays no role in packing
/// decisions and is carried for completeness only.
pub const ITEM_LENGTH: u32 = 1100;

/// A single item to be packed onto a pallet.
///
/// Items are validated at construction and immutable afterwards; an `Item`
/// value that exists always has `id >= 1`, a width between 1 and
/// [`Pallet::MAX_WIDTH`], and a weight between 1 and [`Pallet::MAX_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    id: u32,
    width: u32,
    weight: u32,
}

impl Item {
    /// Creates a validated item.
    ///
    /// Rejects any field below 1, and items that are wider or heavier than an
    /// empty pallet (such an item could never be placed and would stall the
    /// packing rounds).
    pub fn new(id: u32, width: u32, weight: u32) -> Result<Self> {
        if id < 1 {
            return Err(Error::InvalidField {
                field: ItemField::Id,
                value: id,
            });
        }
        if width < 1 {
            return Err(Error::InvalidField {
                field: ItemField::Width,
                value: width,
            });
        }
        if weight < 1 {
            return Err(Error::InvalidField {
                field: ItemField::Weight,
                value: weight,
            });
        }
        if width > Pallet::MAX_WIDTH || weight > Pallet::MAX_WEIGHT {
            return Err(Error::ItemExceedsCapacity { id, width, weight });
        }

        Ok(Self { id, width, weight })
    }

    /// Parses a single whitespace-separated record `id width weight`.
    ///
    /// Missing trailing fields and malformed numeric text parse as 0, letting
    /// field validation surface the real error; fields beyond the third are
    /// ignored.
    pub fn from_record(record: &str) -> Result<Self> {
        let mut fields = record.split_whitespace();
        let id = parse_or_zero(fields.next());
        let width = parse_or_zero(fields.next());
        let weight = parse_or_zero(fields.next());

        Self::new(id, width, weight)
    }

    /// Returns the unique item id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the item width in millimeters.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the item weight in kilograms.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Returns the fixed item length in millimeters.
    pub fn length(&self) -> u32 {
        ITEM_LENGTH
    }

    /// Width per unit weight.
    pub fn density_by_width(&self) -> f64 {
        f64::from(self.width) / f64::from(self.weight)
    }

    /// Scaled weight per unit width, the packing priority score.
    ///
    /// Candidates are considered in descending order of this score, biasing
    /// toward filling weight capacity before width capacity saturates.
    pub fn density_by_weight(&self) -> f64 {
        f64::from(self.weight) / f64::from(self.width) * 0.1
    }
}

fn parse_or_zero(field: Option<&str>) -> u32 {
    field.and_then(|s| s.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_item() {
        let item = Item::new(1, 400, 200).unwrap();
        assert_eq!(item.id(), 1);
        assert_eq!(item.width(), 400);
        assert_eq!(item.weight(), 200);
        assert_eq!(item.length(), 1100);
    }

    #[test]
    fn test_zero_fields_rejected() {
        assert_eq!(
            Item::new(0, 400, 200),
            Err(Error::InvalidField {
                field: ItemField::Id,
                value: 0
            })
        );
        assert_eq!(
            Item::new(1, 0, 200),
            Err(Error::InvalidField {
                field: ItemField::Width,
                value: 0
            })
        );
        assert_eq!(
            Item::new(1, 400, 0),
            Err(Error::InvalidField {
                field: ItemField::Weight,
                value: 0
            })
        );
    }

    #[test]
    fn test_oversized_item_rejected() {
        assert_eq!(
            Item::new(1, 1101, 200),
            Err(Error::ItemExceedsCapacity {
                id: 1,
                width: 1101,
                weight: 200
            })
        );
        assert_eq!(
            Item::new(1, 400, 1001),
            Err(Error::ItemExceedsCapacity {
                id: 1,
                width: 400,
                weight: 1001
            })
        );
        // Exactly pallet-sized is fine.
        assert!(Item::new(1, 1100, 1000).is_ok());
    }

    #[test]
    fn test_densities() {
        let item = Item::new(1, 400, 200).unwrap();
        assert_eq!(item.density_by_width(), 2.0);
        assert_eq!(item.density_by_weight(), 0.05);
    }

    #[test]
    fn test_record_parsing() {
        let item = Item::from_record("3 500 300").unwrap();
        assert_eq!((item.id(), item.width(), item.weight()), (3, 500, 300));

        // Arbitrary whitespace between fields, extras ignored.
        let item = Item::from_record("  7\t 250   125  ignored 99 ").unwrap();
        assert_eq!((item.id(), item.width(), item.weight()), (7, 250, 125));
    }

    #[test]
    fn test_record_missing_fields_default_to_zero() {
        assert_eq!(
            Item::from_record("5 300"),
            Err(Error::InvalidField {
                field: ItemField::Weight,
                value: 0
            })
        );
        assert_eq!(
            Item::from_record("5"),
            Err(Error::InvalidField {
                field: ItemField::Width,
                value: 0
            })
        );
    }

    #[test]
    fn test_record_malformed_numbers_default_to_zero() {
        assert_eq!(
            Item::from_record("abc 300 100"),
            Err(Error::InvalidField {
                field: ItemField::Id,
                value: 0
            })
        );
        assert_eq!(
            Item::from_record("5 3x0 100"),
            Err(Error::InvalidField {
                field: ItemField::Width,
                value: 0
            })
        );
    }
}
