//! Test fixture contexts
//!
//! Small hand-checked contexts plus a generator for random incidence
//! matrices used by the property tests.

use conceptgraph_core::Context;

pub const EXAMPLE_OBJECTS: [&str; 6] = ["1sg", "1pl", "2sg", "2pl", "3sg", "3pl"];

pub const EXAMPLE_PROPERTIES: [&str; 10] = [
    "+1", "-1", "+2", "-2", "+3", "-3", "+sg", "+pl", "-sg", "-pl",
];

/// Property indices per object of the person/number example
const EXAMPLE_ROWS: [[usize; 5]; 6] = [
    [0, 3, 5, 6, 9],
    [0, 3, 5, 7, 8],
    [1, 2, 5, 6, 9],
    [1, 2, 5, 7, 8],
    [1, 3, 4, 6, 9],
    [1, 3, 4, 7, 8],
];

/// Boolean rows from property index lists
pub fn bools_from_indices(rows: &[&[usize]], n_properties: usize) -> Vec<Vec<bool>> {
    rows.iter()
        .map(|row| (0..n_properties).map(|m| row.contains(&m)).collect())
        .collect()
}

/// 6 persons/numbers × 10 features, 22 concepts
pub fn example_context() -> Context {
    let rows: Vec<&[usize]> = EXAMPLE_ROWS.iter().map(|row| &row[..]).collect();
    Context::new(
        EXAMPLE_OBJECTS,
        EXAMPLE_PROPERTIES,
        bools_from_indices(&rows, EXAMPLE_PROPERTIES.len()),
    )
    .expect("example context is valid")
}

/// One object with one property, related
pub fn singleton_context() -> Context {
    Context::new(["spam"], ["eggs"], vec![vec![true]]).expect("singleton context is valid")
}

/// `A:012, B:02345, C:014, D:12`, 12 concepts
pub fn letters_context() -> Context {
    Context::new(
        ["A", "B", "C", "D"],
        ["0", "1", "2", "3", "4", "5"],
        bools_from_indices(&[&[0, 1, 2], &[0, 2, 3, 4, 5], &[0, 1, 4], &[1, 2]], 6),
    )
    .expect("letters context is valid")
}

/// Context with labels `o0..` / `p0..` over the given matrix
pub fn context_from_bools(bools: Vec<Vec<bool>>, n_properties: usize) -> Context {
    let objects: Vec<String> = (0..bools.len()).map(|g| format!("o{g}")).collect();
    let properties: Vec<String> = (0..n_properties).map(|m| format!("p{m}")).collect();
    Context::new(objects, properties, bools).expect("generated context is valid")
}
