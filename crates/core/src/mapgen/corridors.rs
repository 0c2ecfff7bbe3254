//! Elbow corridors: L-shaped, two-cell-wide connectors between successive rooms.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::types::Pos;

use super::rooms::RoomRect;

/// Connect every room to its immediate predecessor in list order. Each link
/// picks one random interior point per room and carves a horizontal run to
/// the target column, then a vertical run to the target point. With fewer
/// than two rooms there is nothing to connect.
pub(super) fn connect_rooms(
    rng: &mut ChaCha8Rng,
    rooms: &[RoomRect],
    floor: &mut BTreeSet<Pos>,
) {
    for pair in rooms.windows(2) {
        let from = pair[0].random_interior_point(rng);
        let to = pair[1].random_interior_point(rng);
        let corner = Pos { y: from.y, x: to.x };
        carve_leg(floor, from, corner);
        carve_leg(floor, corner, to);
    }
}

/// Walk one axis-aligned leg from `from` to `to`. Each unit step marks the
/// current cell plus one perpendicular neighbor (`y + 1` while moving
/// horizontally, `x + 1` while moving vertically), so the corridor ends up
/// two cells wide. The walk stops on reaching `to` without re-marking it;
/// the endpoint is a room-interior cell and is already floor.
fn carve_leg(floor: &mut BTreeSet<Pos>, from: Pos, to: Pos) {
    let mut current = from;
    while current != to {
        if current.x != to.x {
            floor.insert(current);
            floor.insert(Pos { y: current.y + 1, x: current.x });
            current.x += (to.x - current.x).signum();
        } else if current.y != to.y {
            floor.insert(current);
            floor.insert(Pos { y: current.y, x: current.x + 1 });
            current.y += (to.y - current.y).signum();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use crate::mapgen::rooms::carve_room;

    use super::*;

    #[test]
    fn vertical_link_spans_a_two_cell_wide_column() {
        // Two single-cell rooms centered at (2,2) and (2,10): the interior
        // point draws are forced, no horizontal run is needed.
        let top = RoomRect { x: 2, y: 2, width: 1, height: 1 };
        let bottom = RoomRect { x: 2, y: 10, width: 1, height: 1 };

        let mut floor = BTreeSet::new();
        carve_room(&mut floor, &top);
        carve_room(&mut floor, &bottom);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        connect_rooms(&mut rng, &[top, bottom], &mut floor);

        for y in 2..=10 {
            assert!(floor.contains(&Pos { y, x: 2 }), "missing corridor cell at y={y}");
        }
        for y in 2..10 {
            assert!(floor.contains(&Pos { y, x: 3 }), "missing widening cell at y={y}");
        }
        for pos in &floor {
            assert!(
                (2..=3).contains(&pos.x),
                "vertical link should not leave columns 2..=3, found {pos:?}"
            );
        }
    }

    #[test]
    fn horizontal_leg_widens_one_row_up() {
        let mut floor = BTreeSet::new();
        carve_leg(&mut floor, Pos { y: 5, x: 1 }, Pos { y: 5, x: 4 });

        for x in 1..4 {
            assert!(floor.contains(&Pos { y: 5, x }));
            assert!(floor.contains(&Pos { y: 6, x }));
        }
        assert!(!floor.contains(&Pos { y: 5, x: 4 }), "endpoint is left to the room carve");
    }

    #[test]
    fn elbow_connects_diagonal_rooms_through_one_corner() {
        let first = RoomRect { x: 1, y: 1, width: 2, height: 2 };
        let second = RoomRect { x: 8, y: 8, width: 2, height: 2 };

        let mut floor = BTreeSet::new();
        carve_room(&mut floor, &first);
        carve_room(&mut floor, &second);

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        connect_rooms(&mut rng, &[first, second], &mut floor);

        // The carve is axis-aligned only: every corridor cell shares a row
        // with the first room's band or a column with the second room's band.
        for pos in &floor {
            let in_room = first.contains(*pos) || second.contains(*pos);
            let on_horizontal_band = (1..=3).contains(&pos.y);
            let on_vertical_band = (8..=10).contains(&pos.x);
            assert!(
                in_room || on_horizontal_band || on_vertical_band,
                "cell {pos:?} is off both elbow legs"
            );
        }
    }

    #[test]
    fn single_room_list_carves_nothing() {
        let only = RoomRect { x: 0, y: 0, width: 3, height: 3 };
        let mut floor = BTreeSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        connect_rooms(&mut rng, &[only], &mut floor);
        assert!(floor.is_empty());

        connect_rooms(&mut rng, &[], &mut floor);
        assert!(floor.is_empty());
    }
}
