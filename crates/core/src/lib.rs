pub mod config;
pub mod lifecycle;
pub mod mapgen;
pub mod types;

pub use config::{ConfigError, CountRange, DecorationPool, DungeonConfig, FloorConfig, FloorStyle};
pub use lifecycle::{DungeonDirector, EntityHost, FloorSession, TileRenderer};
pub use mapgen::{GeneratedFloor, RoomRect, derive_walls, generate_floor};
pub use types::*;
