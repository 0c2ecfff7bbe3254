//! Floor lifecycle: one session at a time, torn down before the next pass.
//!
//! The director owns the configuration table, the seeded RNG, and the
//! current session. Collaborators sit behind the `TileRenderer` and
//! `EntityHost` seams; the director replays a pass's placement requests
//! against them and is the only component that issues despawns for the
//! handles it recorded.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::{DungeonConfig, FloorStyle};
use crate::mapgen::{GeneratedFloor, generate_floor};
use crate::types::{
    AdvanceOutcome, EntityHandle, LifecycleState, Pos, SpawnRequest, TileLayer,
};

/// Receives every floor and wall cell of a freshly generated session along
/// with the floor's cosmetic style. Purely visual; implementors must not
/// feed anything back into the layers.
pub trait TileRenderer {
    fn render_tile(&mut self, pos: Pos, layer: TileLayer, style: &FloorStyle);
}

/// Spawns and releases the entities a session asks for. Handles are opaque
/// to the core; `despawn` is issued at most once per recorded handle.
pub trait EntityHost {
    fn spawn(&mut self, request: &SpawnRequest) -> EntityHandle;
    fn despawn(&mut self, handle: EntityHandle);
}

/// The transient state of one generation pass. Dropped wholesale, after its
/// entities are despawned, when the dungeon advances.
#[derive(Clone, Debug)]
pub struct FloorSession {
    pub floor_index: usize,
    pub layout: GeneratedFloor,
    pub entities: Vec<EntityHandle>,
}

pub struct DungeonDirector {
    config: DungeonConfig,
    rng: ChaCha8Rng,
    state: LifecycleState,
    floor_index: usize,
    session: Option<FloorSession>,
}

impl DungeonDirector {
    /// The seed is injected so whole runs are reproducible; nothing in the
    /// core reaches for ambient randomness.
    pub fn new(config: DungeonConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: LifecycleState::Uninitialized,
            floor_index: 0,
            session: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn floor_index(&self) -> usize {
        self.floor_index
    }

    pub fn floor_count(&self) -> usize {
        self.config.floors.len()
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&FloorSession> {
        self.session.as_ref()
    }

    /// Run a generation pass for the current floor index. Any live session
    /// is torn down first, so calling this twice rebuilds the same index
    /// rather than leaking entities.
    pub fn generate(
        &mut self,
        tiles: &mut impl TileRenderer,
        entities: &mut impl EntityHost,
    ) -> &FloorSession {
        self.teardown(entities);
        self.run_pass(tiles, entities)
    }

    /// Tear down the current session and generate the next configured
    /// floor. Past the end of the table this is a no-op that reports
    /// `NoMoreFloors` and leaves the session untouched.
    pub fn advance(
        &mut self,
        tiles: &mut impl TileRenderer,
        entities: &mut impl EntityHost,
    ) -> AdvanceOutcome {
        if self.floor_index + 1 >= self.config.floors.len() {
            log::warn!("no more floors after index {}", self.floor_index);
            self.state = LifecycleState::Exhausted;
            return AdvanceOutcome::NoMoreFloors;
        }

        self.teardown(entities);
        self.floor_index += 1;
        self.run_pass(tiles, entities);
        AdvanceOutcome::Advanced { floor_index: self.floor_index }
    }

    /// One synchronous, atomic pass: generate, emit tiles, replay spawns,
    /// install the session. Callers never observe the `Generating` state
    /// across a call boundary.
    fn run_pass(
        &mut self,
        tiles: &mut impl TileRenderer,
        entities: &mut impl EntityHost,
    ) -> &FloorSession {
        self.state = LifecycleState::Generating;

        let floor_config = &self.config.floors[self.floor_index];
        let layout = generate_floor(&mut self.rng, &self.config, floor_config);

        for &pos in &layout.floor_cells {
            tiles.render_tile(pos, TileLayer::Floor, &floor_config.style);
        }
        for &pos in &layout.wall_cells {
            tiles.render_tile(pos, TileLayer::Wall, &floor_config.style);
        }

        let mut handles = Vec::with_capacity(layout.spawn_requests.len());
        for request in &layout.spawn_requests {
            handles.push(entities.spawn(request));
        }

        log::info!(
            "floor {} ready: {} rooms, {} entities",
            self.floor_index,
            layout.rooms.len(),
            handles.len()
        );

        self.session =
            Some(FloorSession { floor_index: self.floor_index, layout, entities: handles });
        self.state = LifecycleState::Ready;
        self.session.as_ref().expect("session was just installed")
    }

    fn teardown(&mut self, entities: &mut impl EntityHost) {
        if let Some(session) = self.session.take() {
            for handle in session.entities {
                entities.despawn(handle);
            }
        }
    }
}
