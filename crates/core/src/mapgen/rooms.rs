//! Room placement: rejection-sampled, non-overlapping axis-aligned rectangles.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::config::DungeonConfig;
use crate::types::Pos;

use super::rng::sample_range;

/// An axis-aligned room with half-open extents: cells span
/// `[x, x + width) × [y, y + height)`. Immutable once accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RoomRect {
    pub(super) fn right(self) -> i32 {
        self.x + self.width
    }

    pub(super) fn bottom(self) -> i32 {
        self.y + self.height
    }

    pub fn center(self) -> Pos {
        Pos { y: self.y + self.height / 2, x: self.x + self.width / 2 }
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.x && pos.x < self.right() && pos.y >= self.y && pos.y < self.bottom()
    }

    /// Touching rooms share no cell and do not count as overlapping.
    pub fn intersects(self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Uniform interior cell, inclusive of the minimum corner, exclusive of
    /// the maximum on each axis.
    pub(super) fn random_interior_point(self, rng: &mut ChaCha8Rng) -> Pos {
        Pos {
            y: sample_range(rng, self.y, self.bottom()),
            x: sample_range(rng, self.x, self.right()),
        }
    }
}

/// Run exactly `room_count` placement attempts. Each attempt samples a size
/// and a top-left corner that keeps the room inside the grid, then is
/// accepted only if it overlaps no previously accepted room; rejected
/// attempts are discarded without a retry, so the result holds at most
/// `room_count` rooms. Accepted interiors are carved into `floor`.
pub(super) fn place_rooms(
    rng: &mut ChaCha8Rng,
    config: &DungeonConfig,
    floor: &mut BTreeSet<Pos>,
) -> Vec<RoomRect> {
    let mut rooms: Vec<RoomRect> = Vec::new();

    for _ in 0..config.room_count {
        let candidate = sample_room(rng, config);
        if rooms.iter().any(|existing| candidate.intersects(existing)) {
            continue;
        }
        carve_room(floor, &candidate);
        rooms.push(candidate);
    }

    rooms
}

fn sample_room(rng: &mut ChaCha8Rng, config: &DungeonConfig) -> RoomRect {
    let width = sample_range(rng, config.room_size_min.0, config.room_size_max.0);
    let height = sample_range(rng, config.room_size_min.1, config.room_size_max.1);
    let x = sample_range(rng, 0, config.grid_width - width);
    let y = sample_range(rng, 0, config.grid_height - height);
    RoomRect { x, y, width, height }
}

pub(super) fn carve_room(floor: &mut BTreeSet<Pos>, room: &RoomRect) {
    for y in room.y..room.bottom() {
        for x in room.x..room.right() {
            floor.insert(Pos { y, x });
        }
    }
}
