use slotmap::new_key_type;

new_key_type! {
    pub struct EntityHandle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileLayer {
    Floor,
    Wall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlacementKind {
    Player,
    Enemy,
    ExitMarker,
    Decoration { rotation_degrees: i32 },
}

/// One placement emitted by a generation pass. The archetype is an opaque
/// reference resolved by the spawning collaborator, never by this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnRequest {
    pub kind: PlacementKind,
    pub archetype: String,
    pub pos: Pos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Generating,
    Ready,
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced { floor_index: usize },
    NoMoreFloors,
}
