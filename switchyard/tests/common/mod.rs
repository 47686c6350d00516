#![allow(dead_code)]

use switchyard::{DispatchTable, Directive, testing::CallLog};

// ============================================================================
// Test Tables
// ============================================================================

pub type PrintTable = DispatchTable<i32, fn(String)>;

/// Cases 1, 2 and 4 plus a default, each writing one line into `log`.
pub fn print_table(log: &CallLog<String>) -> PrintTable {
    let case = |label: &'static str| {
        let log = log.clone();
        move |s: String| log.record(format!("{label}: {s}"))
    };

    DispatchTable::new([
        Directive::case(1, case("Case 1")),
        Directive::case(2, case("Case 2")),
        Directive::case(4, case("Case 4")),
        Directive::default(case("Unknown case")),
    ])
}

/// Keys `0..n` each returning `key * 10`.
pub fn tens(n: u32) -> Vec<Directive<u32, fn() -> u32>> {
    (0..n)
        .map(|key| Directive::case(key, move || key * 10))
        .collect()
}
