//! Generated-floor model: layers, rooms, and the ordered placement requests.

use std::collections::BTreeSet;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{PlacementKind, Pos, SpawnRequest};

use super::rooms::RoomRect;

/// Everything one generation pass produced. Layers are coordinate sets; the
/// room list keeps generation order (room 0 is the start room); the spawn
/// requests are in emission order for the entity collaborator to replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub floor_cells: BTreeSet<Pos>,
    pub wall_cells: BTreeSet<Pos>,
    pub decoration_cells: BTreeSet<Pos>,
    pub rooms: Vec<RoomRect>,
    pub spawn_requests: Vec<SpawnRequest>,
}

impl GeneratedFloor {
    pub fn is_floor(&self, pos: Pos) -> bool {
        self.floor_cells.contains(&pos)
    }

    pub fn player_spawn(&self) -> Option<&SpawnRequest> {
        self.spawn_requests.iter().find(|request| request.kind == PlacementKind::Player)
    }

    pub fn exit_marker(&self) -> Option<&SpawnRequest> {
        self.spawn_requests.iter().find(|request| request.kind == PlacementKind::ExitMarker)
    }

    /// Stable little-endian encoding of the whole floor, for determinism
    /// checks and fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        encode_cells(&mut bytes, &self.floor_cells);
        encode_cells(&mut bytes, &self.wall_cells);
        encode_cells(&mut bytes, &self.decoration_cells);

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend(room.x.to_le_bytes());
            bytes.extend(room.y.to_le_bytes());
            bytes.extend(room.width.to_le_bytes());
            bytes.extend(room.height.to_le_bytes());
        }

        bytes.extend((self.spawn_requests.len() as u32).to_le_bytes());
        for request in &self.spawn_requests {
            match request.kind {
                PlacementKind::Player => bytes.push(0),
                PlacementKind::Enemy => bytes.push(1),
                PlacementKind::ExitMarker => bytes.push(2),
                PlacementKind::Decoration { rotation_degrees } => {
                    bytes.push(3);
                    bytes.extend(rotation_degrees.to_le_bytes());
                }
            }
            bytes.extend((request.archetype.len() as u32).to_le_bytes());
            bytes.extend(request.archetype.as_bytes());
            bytes.extend(request.pos.y.to_le_bytes());
            bytes.extend(request.pos.x.to_le_bytes());
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn encode_cells(bytes: &mut Vec<u8>, cells: &BTreeSet<Pos>) {
    bytes.extend((cells.len() as u32).to_le_bytes());
    for pos in cells {
        bytes.extend(pos.y.to_le_bytes());
        bytes.extend(pos.x.to_le_bytes());
    }
}
