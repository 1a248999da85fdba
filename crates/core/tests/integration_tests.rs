//! Integration tests for palletize-core.

use palletize_core::{Error, ItemField, Pallet, Warehouse};

mod planning_tests {
    use super::*;

    #[test]
    fn test_reference_scenario_end_to_end() {
        let mut warehouse = Warehouse::with_module_names(["A", "B", "C"]);
        warehouse
            .import("1 400 200\n2 400 200\n3 500 300\n4 200 200\n5 500 300")
            .unwrap();

        let plan = warehouse.plan().unwrap();

        // Two pallets: {4,3,1} at 1100 mm / 700 kg and {5,2} at 900 mm /
        // 500 kg. The wider pallet goes to module A, the other to B, C stays
        // empty.
        assert_eq!(plan.pallets_used, 2);
        assert_eq!(plan.total_items, 5);
        assert_eq!(plan.lines(), vec!["A: 3,1,4", "B: 5,2", "C: "]);
    }

    #[test]
    fn test_dense_scenario_end_to_end() {
        let mut warehouse = Warehouse::with_module_names(["A", "B", "C"]);
        warehouse
            .import("1 350 550\n2 200 300\n3 150 150\n4 100 100\n5 200 300\n6 100 200")
            .unwrap();

        let plan = warehouse.plan().unwrap();

        // Every id appears exactly once across all modules.
        let mut seen: Vec<u32> = plan
            .assignments
            .iter()
            .flat_map(|a| a.item_ids.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_determinism_across_runs() {
        let input = "1 400 200\n2 500 300\n3 500 300\n4 200 200\n5 400 200\n6 950 800";
        let run = || {
            let mut warehouse = Warehouse::with_module_names(["A", "B", "C", "D"]);
            warehouse.import(input).unwrap();
            warehouse.plan().unwrap().lines()
        };

        let first = run();
        assert_eq!(first, run());
        assert_eq!(first, run());
    }

    #[test]
    fn test_module_names_sorted_for_output() {
        let mut warehouse = Warehouse::with_module_names(["Dock", "Bay", "Aisle"]);
        warehouse.import("1 400 200").unwrap();

        let plan = warehouse.plan().unwrap();
        let names: Vec<&str> = plan.assignments.iter().map(|a| a.module.as_str()).collect();
        assert_eq!(names, vec!["Aisle", "Bay", "Dock"]);
        // The single pallet lands in the lexicographically first slot.
        assert_eq!(plan.lines()[0], "Aisle: 1");
    }

    #[test]
    fn test_capacity_bounds_hold_for_every_pallet() {
        let input = "1 350 550\n2 200 300\n3 150 150\n4 100 100\n5 200 300\n6 100 200";
        let pallets = {
            let mut warehouse = Warehouse::with_module_names(["A", "B", "C", "D", "E", "F"]);
            warehouse.import(input).unwrap();
            palletize_core::pack(warehouse.items()).unwrap()
        };

        for pallet in &pallets {
            assert!(pallet.total_width() <= Pallet::MAX_WIDTH);
            assert!(pallet.total_weight() <= Pallet::MAX_WEIGHT);
            assert!(!pallet.is_empty());
        }
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_no_modules_fails_before_parsing() {
        let mut warehouse = Warehouse::new(Vec::new());
        // The input is invalid too; the module check must win.
        assert_eq!(
            warehouse.import("not a record").unwrap_err(),
            Error::NoModules
        );
    }

    #[test]
    fn test_duplicate_id_rolls_back_whole_batch() {
        let mut warehouse = Warehouse::with_module_names(["A"]);
        assert_eq!(
            warehouse.import("1 1 1\n1 2 2").unwrap_err(),
            Error::DuplicateId(1)
        );
        // All-or-nothing import: not even the first record survives.
        assert!(warehouse.items().is_empty());
    }

    #[test]
    fn test_insufficient_modules_produces_no_output() {
        let mut warehouse = Warehouse::with_module_names(["A", "B"]);
        warehouse
            .import("1 1000 900\n2 1000 900\n3 1000 900")
            .unwrap();

        assert_eq!(
            warehouse.plan().unwrap_err(),
            Error::InsufficientModules {
                modules: 2,
                pallets: 3
            }
        );
    }

    #[test]
    fn test_short_record_fails_field_validation() {
        let mut warehouse = Warehouse::with_module_names(["A"]);
        assert_eq!(
            warehouse.import("1 400").unwrap_err(),
            Error::InvalidField {
                field: ItemField::Weight,
                value: 0
            }
        );
    }

    #[test]
    fn test_oversized_item_rejected_at_import() {
        let mut warehouse = Warehouse::with_module_names(["A"]);
        assert_eq!(
            warehouse.import("1 1200 100").unwrap_err(),
            Error::ItemExceedsCapacity {
                id: 1,
                width: 1200,
                weight: 100
            }
        );
    }
}
