//! Procedural floor generation split into coherent pipeline stages.

pub mod model;

mod corridors;
mod placement;
mod rng;
mod rooms;
mod walls;

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

pub use model::GeneratedFloor;
pub use rooms::RoomRect;
pub use walls::derive_walls;

use crate::config::{DungeonConfig, FloorConfig};

use self::corridors::connect_rooms;
use self::placement::{PlacementContext, place_entities};
use self::rooms::place_rooms;

/// Run one full generation pass for `floor_config`, always in the same
/// stage order: room placement, corridor carving, wall derivation, entity
/// and decoration placement.
pub fn generate_floor(
    rng: &mut ChaCha8Rng,
    config: &DungeonConfig,
    floor_config: &FloorConfig,
) -> GeneratedFloor {
    let mut floor_cells = BTreeSet::new();
    let rooms = place_rooms(rng, config, &mut floor_cells);
    connect_rooms(rng, &rooms, &mut floor_cells);
    let wall_cells = derive_walls(&floor_cells);

    let placement = place_entities(
        rng,
        &PlacementContext {
            rooms: &rooms,
            floor_config,
            player_archetype: &config.player_archetype,
            exit_archetype: &config.exit_archetype,
        },
    );

    log::debug!(
        "carved {} rooms, {} floor cells, {} wall cells, {} placement requests",
        rooms.len(),
        floor_cells.len(),
        wall_cells.len(),
        placement.requests.len()
    );

    GeneratedFloor {
        floor_cells,
        wall_cells,
        decoration_cells: placement.decoration_cells,
        rooms,
        spawn_requests: placement.requests,
    }
}
