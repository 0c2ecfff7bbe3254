//! Headless preview harness: loads a floor-configuration table, walks the
//! dungeon director through every floor, and prints an ASCII rendering of
//! each pass alongside its fingerprint.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use slotmap::SlotMap;
use warren_core::{
    AdvanceOutcome, DungeonConfig, DungeonDirector, EntityHandle, EntityHost, FloorSession,
    FloorStyle, PlacementKind, Pos, SpawnRequest, TileLayer, TileRenderer,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a dungeon configuration JSON file (omit for the built-in table)
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

/// Collects tile emissions into a sparse glyph map.
#[derive(Default)]
struct TileCanvas {
    glyphs: BTreeMap<Pos, char>,
}

impl TileCanvas {
    fn clear(&mut self) {
        self.glyphs.clear();
    }
}

impl TileRenderer for TileCanvas {
    fn render_tile(&mut self, pos: Pos, layer: TileLayer, _style: &FloorStyle) {
        let glyph = match layer {
            TileLayer::Floor => '.',
            TileLayer::Wall => '#',
        };
        self.glyphs.insert(pos, glyph);
    }
}

/// Slotmap-backed entity store standing in for a real spawning collaborator.
#[derive(Default)]
struct EntityLedger {
    live: SlotMap<EntityHandle, SpawnRequest>,
}

impl EntityHost for EntityLedger {
    fn spawn(&mut self, request: &SpawnRequest) -> EntityHandle {
        self.live.insert(request.clone())
    }

    fn despawn(&mut self, handle: EntityHandle) {
        self.live.remove(handle);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DungeonConfig::load(path)
            .map_err(|e| anyhow::anyhow!("failed to load {}: {e}", path.display()))?,
        None => DungeonConfig::default(),
    };

    let mut canvas = TileCanvas::default();
    let mut ledger = EntityLedger::default();
    let mut director = DungeonDirector::new(config, args.seed);

    println!("seed {} across {} floors", args.seed, director.floor_count());

    director.generate(&mut canvas, &mut ledger);
    print_floor(&director, &canvas, &ledger);

    loop {
        canvas.clear();
        match director.advance(&mut canvas, &mut ledger) {
            AdvanceOutcome::Advanced { .. } => print_floor(&director, &canvas, &ledger),
            AdvanceOutcome::NoMoreFloors => {
                println!("no more floors.");
                break;
            }
        }
    }

    Ok(())
}

fn print_floor(director: &DungeonDirector, canvas: &TileCanvas, ledger: &EntityLedger) {
    let session = director.session().expect("a rendered pass always has a session");
    println!(
        "floor {} | rooms {} | entities {} | fingerprint {:016x}",
        session.floor_index,
        session.layout.rooms.len(),
        session.entities.len(),
        session.layout.fingerprint()
    );
    for line in render_lines(session, canvas, ledger) {
        println!("{line}");
    }
    println!();
}

fn render_lines(
    session: &FloorSession,
    canvas: &TileCanvas,
    ledger: &EntityLedger,
) -> Vec<String> {
    let Some(first) = canvas.glyphs.keys().next() else {
        return vec!["(empty floor)".to_string()];
    };

    let mut min = *first;
    let mut max = *first;
    for pos in canvas.glyphs.keys() {
        min.y = min.y.min(pos.y);
        min.x = min.x.min(pos.x);
        max.y = max.y.max(pos.y);
        max.x = max.x.max(pos.x);
    }

    let width = (max.x - min.x + 1) as usize;
    let height = (max.y - min.y + 1) as usize;
    let mut grid = vec![vec![' '; width]; height];

    for (pos, glyph) in &canvas.glyphs {
        grid[(pos.y - min.y) as usize][(pos.x - min.x) as usize] = *glyph;
    }

    // Entities draw over tiles; the player and exit stay visible over
    // decorations and enemies.
    let mut overlay: Vec<(&SpawnRequest, char)> = Vec::new();
    for request in ledger.live.values() {
        let glyph = match request.kind {
            PlacementKind::Decoration { .. } => '*',
            PlacementKind::Enemy => 'e',
            PlacementKind::ExitMarker => '>',
            PlacementKind::Player => '@',
        };
        overlay.push((request, glyph));
    }
    overlay.sort_by_key(|(request, _)| match request.kind {
        PlacementKind::Decoration { .. } => 0,
        PlacementKind::Enemy => 1,
        PlacementKind::ExitMarker => 2,
        PlacementKind::Player => 3,
    });
    for (request, glyph) in overlay {
        if session.layout.is_floor(request.pos) {
            grid[(request.pos.y - min.y) as usize][(request.pos.x - min.x) as usize] = glyph;
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}
