//! Player, enemy, exit-marker, and decoration placement within carved rooms.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::config::{DecorationPool, FloorConfig};
use crate::types::{PlacementKind, Pos, SpawnRequest};

use super::rng::{choose, sample_count, sample_range};
use super::rooms::RoomRect;

pub(super) struct PlacementContext<'a> {
    pub(super) rooms: &'a [RoomRect],
    pub(super) floor_config: &'a FloorConfig,
    pub(super) player_archetype: &'a str,
    pub(super) exit_archetype: &'a str,
}

pub(super) struct PlacementOutput {
    pub(super) requests: Vec<SpawnRequest>,
    pub(super) decoration_cells: BTreeSet<Pos>,
}

/// Emit the placement requests for one floor, in order: player, enemies
/// (room by room), exit marker, decorations. An empty room list is a legal
/// degenerate floor and emits nothing at all.
pub(super) fn place_entities(
    rng: &mut ChaCha8Rng,
    context: &PlacementContext<'_>,
) -> PlacementOutput {
    let mut requests = Vec::new();
    let mut decoration_cells = BTreeSet::new();

    let Some(start_room) = context.rooms.first() else {
        return PlacementOutput { requests, decoration_cells };
    };

    requests.push(SpawnRequest {
        kind: PlacementKind::Player,
        archetype: context.player_archetype.to_string(),
        pos: start_room.center(),
    });

    place_enemies(rng, context, &mut requests);

    requests.push(SpawnRequest {
        kind: PlacementKind::ExitMarker,
        archetype: context.exit_archetype.to_string(),
        pos: furthest_room(context.rooms).center(),
    });

    place_decorations(rng, context, &mut requests, &mut decoration_cells);

    PlacementOutput { requests, decoration_cells }
}

fn place_enemies(
    rng: &mut ChaCha8Rng,
    context: &PlacementContext<'_>,
    requests: &mut Vec<SpawnRequest>,
) {
    let pool = &context.floor_config.enemy_pool;
    if pool.is_empty() {
        return;
    }

    for room in context.rooms.iter().skip(1) {
        let enemy_count = sample_count(rng, context.floor_config.enemies);
        for _ in 0..enemy_count {
            let pos = room.random_interior_point(rng);
            let archetype = choose(rng, pool).clone();
            requests.push(SpawnRequest { kind: PlacementKind::Enemy, archetype, pos });
        }
    }
}

fn place_decorations(
    rng: &mut ChaCha8Rng,
    context: &PlacementContext<'_>,
    requests: &mut Vec<SpawnRequest>,
    decoration_cells: &mut BTreeSet<Pos>,
) {
    for room in context.rooms {
        scatter_pool(
            rng,
            room,
            &context.floor_config.random_decorations,
            true,
            requests,
            decoration_cells,
        );
        scatter_pool(
            rng,
            room,
            &context.floor_config.regular_decorations,
            false,
            requests,
            decoration_cells,
        );
    }
}

/// One decoration pass over one room. A sampled position already holding a
/// decoration (from any room or pass of this session) is skipped without a
/// retry, so the realized count can fall short of the sampled one.
fn scatter_pool(
    rng: &mut ChaCha8Rng,
    room: &RoomRect,
    decorations: &DecorationPool,
    randomize_rotation: bool,
    requests: &mut Vec<SpawnRequest>,
    decoration_cells: &mut BTreeSet<Pos>,
) {
    if decorations.pool.is_empty() {
        return;
    }

    let count = sample_count(rng, decorations.count);
    for _ in 0..count {
        let pos = room.random_interior_point(rng);
        if decoration_cells.contains(&pos) {
            continue;
        }
        let archetype = choose(rng, &decorations.pool).clone();
        let rotation_degrees = if randomize_rotation { sample_range(rng, 0, 360) } else { 0 };
        requests.push(SpawnRequest {
            kind: PlacementKind::Decoration { rotation_degrees },
            archetype,
            pos,
        });
        decoration_cells.insert(pos);
    }
}

/// Room whose center lies farthest (squared Euclidean) from the start
/// room's center. The strict comparison keeps the earliest room on ties,
/// and a single-room list degenerates to the start room itself.
fn furthest_room(rooms: &[RoomRect]) -> &RoomRect {
    let origin = rooms[0].center();
    let mut furthest = &rooms[0];
    let mut furthest_distance = 0_i64;

    for room in rooms {
        let distance = squared_distance(origin, room.center());
        if distance > furthest_distance {
            furthest = room;
            furthest_distance = distance;
        }
    }

    furthest
}

fn squared_distance(a: Pos, b: Pos) -> i64 {
    let dy = i64::from(a.y - b.y);
    let dx = i64::from(a.x - b.x);
    dy * dy + dx * dx
}
