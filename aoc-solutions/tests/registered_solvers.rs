//! The 2024 solvers are discoverable through the plugin inventory

use aoc_solver::SolverRegistryBuilder;
use aoc_solutions as _;

fn registry() -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2024)
        .expect("duplicate 2024 solver")
        .build()
}

#[test]
fn test_all_days_registered_with_inputs() {
    let registry = registry();
    let inputs: Vec<(u8, &str, &str)> = registry
        .storage()
        .iter_info()
        .map(|info| (info.day, info.meta.title, info.meta.input))
        .collect();

    assert_eq!(
        inputs,
        vec![
            (1, "Historian Hysteria", "day_1/lists.txt"),
            (2, "Red-Nosed Reports", "day_2/unusual_data.txt"),
            (3, "Mull It Over", "day_3/corrupted_data.txt"),
        ]
    );
}

#[test]
fn test_labels_through_dyn_solver() {
    let registry = registry();

    let solver = registry.create_solver(2024, 1, "3   4\n4   3").unwrap();
    assert_eq!(solver.part_label(1), Some("Total distance"));
    assert_eq!(solver.part_label(2), Some("Similarity score"));

    let solver = registry.create_solver(2024, 2, "1 2 3").unwrap();
    assert_eq!(solver.part_label(1), Some("Number of safe reports"));
    assert_eq!(
        solver.part_label(2),
        Some("Number of safe reports with Problem Dampener")
    );

    let solver = registry.create_solver(2024, 3, "").unwrap();
    assert_eq!(solver.part_label(1), Some("Part 1 solution"));
    assert_eq!(solver.part_label(2), Some("Part 2 solution"));
}

#[test]
fn test_end_to_end_examples() {
    let registry = registry();

    let mut day_1 = registry
        .create_solver(2024, 1, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n")
        .unwrap();
    assert_eq!(day_1.solve(1).unwrap().answer, "11");
    assert_eq!(day_1.solve(2).unwrap().answer, "31");

    let mut day_2 = registry
        .create_solver(2024, 2, "7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n")
        .unwrap();
    assert_eq!(day_2.solve(1).unwrap().answer, "2");
    assert_eq!(day_2.solve(2).unwrap().answer, "4");

    let mut day_3 = registry
        .create_solver(
            2024,
            3,
            "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))",
        )
        .unwrap();
    assert_eq!(day_3.solve(1).unwrap().answer, "161");
    assert_eq!(day_3.solve(2).unwrap().answer, "48");
}

#[test]
fn test_malformed_input_fails_at_creation() {
    let registry = registry();
    assert!(registry.create_solver(2024, 1, "1 2 3").is_err());
    assert!(registry.create_solver(2024, 2, "1\n").is_err());
}
