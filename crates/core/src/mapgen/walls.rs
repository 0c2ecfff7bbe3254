//! Wall derivation: the Moore-neighborhood boundary of the floor layer.

use std::collections::BTreeSet;

use crate::types::Pos;

/// Pure function of the floor layer: a cell is a wall iff it is not floor
/// and at least one of its eight neighbors is. Set semantics deduplicate
/// boundary cells that border several floor cells, and the result is
/// disjoint from the floor layer by construction.
pub fn derive_walls(floor: &BTreeSet<Pos>) -> BTreeSet<Pos> {
    let mut walls = BTreeSet::new();
    for pos in floor {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let neighbor = Pos { y: pos.y + dy, x: pos.x + dx };
                if !floor.contains(&neighbor) {
                    walls.insert(neighbor);
                }
            }
        }
    }
    walls
}
