//! Floor configuration table: serde model, file loading, load-time validation.
//!
//! The table is plain JSON: generation-wide grid settings plus one record per
//! dungeon level (enemy pool and count range, two independently sampled
//! decoration pools, cosmetic pass-through for the tile renderer). All range
//! and pool validation happens here, when the table is loaded; the generator
//! itself never checks or clamps, so a table that skips validation can only
//! produce sparse or empty floors, not panics.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Configuration model
// ---------------------------------------------------------------------------

/// Inclusive count range `[min, max]`, e.g. enemies per room.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

/// A decoration pool plus how many draws each room takes from it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DecorationPool {
    pub pool: Vec<String>,
    pub count: CountRange,
}

/// Cosmetic parameters passed through, untouched, to the tile renderer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FloorStyle {
    pub floor_color: String,
    pub wall_color: String,
    #[serde(default)]
    pub floor_sprites: Vec<String>,
    #[serde(default)]
    pub wall_sprites: Vec<String>,
    #[serde(default)]
    pub ambience: Option<String>,
}

/// One dungeon level: who spawns there and what it looks like.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FloorConfig {
    pub enemies: CountRange,
    pub enemy_pool: Vec<String>,
    pub random_decorations: DecorationPool,
    pub regular_decorations: DecorationPool,
    pub style: FloorStyle,
}

/// The full table: grid settings shared by every floor, plus the ordered
/// per-level records. The lifecycle controller reads floors by index and
/// never mutates the table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DungeonConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Placement attempts per floor, not guaranteed successes.
    pub room_count: u32,
    pub room_size_min: (i32, i32),
    pub room_size_max: (i32, i32),
    pub player_archetype: String,
    pub exit_archetype: String,
    pub floors: Vec<FloorConfig>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Describes why a configuration table could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The file is not valid JSON for the table shape.
    Parse(String),
    /// The table parsed but violates a range or pool rule.
    Invalid { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(message) => write!(f, "invalid config JSON: {message}"),
            Self::Invalid { message } => write!(f, "invalid config: {message}"),
        }
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid { message }
}

// ---------------------------------------------------------------------------
// Loading and validation
// ---------------------------------------------------------------------------

impl DungeonConfig {
    /// Load and validate a JSON configuration table from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&data)
    }

    /// Parse and validate a JSON configuration table.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject malformed ranges up front. Rooms are sampled with an exclusive
    /// upper bound, so the largest width a range can produce is
    /// `max(min, max - 1)`; that value has to fit the grid or every placement
    /// attempt would fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(invalid(format!(
                "grid bounds must be positive, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.room_size_min.0 < 1 || self.room_size_min.1 < 1 {
            return Err(invalid(format!(
                "room sizes must be at least 1x1, got min {:?}",
                self.room_size_min
            )));
        }
        if self.room_size_min.0 > self.room_size_max.0
            || self.room_size_min.1 > self.room_size_max.1
        {
            return Err(invalid(format!(
                "room size min {:?} exceeds max {:?}",
                self.room_size_min, self.room_size_max
            )));
        }
        if largest_sampleable(self.room_size_min.0, self.room_size_max.0) > self.grid_width
            || largest_sampleable(self.room_size_min.1, self.room_size_max.1) > self.grid_height
        {
            return Err(invalid(format!(
                "room size range {:?}..{:?} exceeds grid bounds {}x{}",
                self.room_size_min, self.room_size_max, self.grid_width, self.grid_height
            )));
        }
        if self.player_archetype.is_empty() {
            return Err(invalid("player archetype must not be empty".to_string()));
        }
        if self.exit_archetype.is_empty() {
            return Err(invalid("exit archetype must not be empty".to_string()));
        }
        if self.floors.is_empty() {
            return Err(invalid("at least one floor configuration is required".to_string()));
        }

        for (index, floor) in self.floors.iter().enumerate() {
            check_count_range(index, "enemies", floor.enemies)?;
            check_count_range(index, "random_decorations", floor.random_decorations.count)?;
            check_count_range(index, "regular_decorations", floor.regular_decorations.count)?;

            if floor.enemies.max > 0 && floor.enemy_pool.is_empty() {
                return Err(invalid(format!(
                    "floor {index}: enemy count can be nonzero but the enemy pool is empty"
                )));
            }
            check_pool(index, "random_decorations", &floor.random_decorations)?;
            check_pool(index, "regular_decorations", &floor.regular_decorations)?;
        }

        Ok(())
    }
}

fn check_count_range(floor_index: usize, name: &str, range: CountRange) -> Result<(), ConfigError> {
    if range.min > range.max {
        return Err(invalid(format!(
            "floor {floor_index}: {name} count range has min {} > max {}",
            range.min, range.max
        )));
    }
    Ok(())
}

fn check_pool(
    floor_index: usize,
    name: &str,
    decorations: &DecorationPool,
) -> Result<(), ConfigError> {
    if decorations.count.max > 0 && decorations.pool.is_empty() {
        return Err(invalid(format!(
            "floor {floor_index}: {name} count can be nonzero but the pool is empty"
        )));
    }
    Ok(())
}

fn largest_sampleable(lo: i32, hi: i32) -> i32 {
    if hi > lo { hi - 1 } else { lo }
}

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

impl Default for DungeonConfig {
    /// Three-level starter table used by the preview tool and the test
    /// suites when no external table is supplied.
    fn default() -> Self {
        Self {
            grid_width: 50,
            grid_height: 50,
            room_count: 12,
            room_size_min: (4, 4),
            room_size_max: (9, 9),
            player_archetype: "player".to_string(),
            exit_archetype: "stairs_down".to_string(),
            floors: vec![
                FloorConfig {
                    enemies: CountRange { min: 1, max: 3 },
                    enemy_pool: names(&["giant_rat", "slime"]),
                    random_decorations: DecorationPool {
                        pool: names(&["bones", "rubble", "mushroom"]),
                        count: CountRange { min: 1, max: 4 },
                    },
                    regular_decorations: DecorationPool {
                        pool: names(&["torch", "crate"]),
                        count: CountRange { min: 0, max: 2 },
                    },
                    style: FloorStyle {
                        floor_color: "#6e5f4b".to_string(),
                        wall_color: "#3d3529".to_string(),
                        floor_sprites: names(&["floor_plain", "floor_cracked"]),
                        wall_sprites: names(&["wall_brick"]),
                        ambience: Some("catacombs_loop".to_string()),
                    },
                },
                FloorConfig {
                    enemies: CountRange { min: 2, max: 4 },
                    enemy_pool: names(&["slime", "skeleton_archer"]),
                    random_decorations: DecorationPool {
                        pool: names(&["bones", "cobweb", "mushroom"]),
                        count: CountRange { min: 1, max: 5 },
                    },
                    regular_decorations: DecorationPool {
                        pool: names(&["torch", "barrel"]),
                        count: CountRange { min: 1, max: 2 },
                    },
                    style: FloorStyle {
                        floor_color: "#5a6b54".to_string(),
                        wall_color: "#2f3b2c".to_string(),
                        floor_sprites: names(&["floor_mossy", "floor_plain"]),
                        wall_sprites: names(&["wall_mossy"]),
                        ambience: Some("sunken_halls_loop".to_string()),
                    },
                },
                FloorConfig {
                    enemies: CountRange { min: 3, max: 6 },
                    enemy_pool: names(&["skeleton_archer", "ghoul", "bone_knight"]),
                    random_decorations: DecorationPool {
                        pool: names(&["rubble", "cobweb", "skull_pile"]),
                        count: CountRange { min: 2, max: 6 },
                    },
                    regular_decorations: DecorationPool {
                        pool: names(&["brazier", "statue"]),
                        count: CountRange { min: 1, max: 3 },
                    },
                    style: FloorStyle {
                        floor_color: "#4a3f55".to_string(),
                        wall_color: "#241f2e".to_string(),
                        floor_sprites: names(&["floor_obsidian"]),
                        wall_sprites: names(&["wall_obsidian", "wall_runed"]),
                        ambience: Some("deep_crypt_loop".to_string()),
                    },
                },
            ],
        }
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_table_passes_validation() {
        DungeonConfig::default().validate().expect("starter table should be valid");
    }

    #[test]
    fn json_round_trip_through_a_file() {
        let config = DungeonConfig::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dungeon.json");
        fs::write(&path, serde_json::to_string_pretty(&config).expect("serialize"))
            .expect("write config");

        let loaded = DungeonConfig::load(&path).expect("load should succeed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn rejects_inverted_count_range() {
        let mut config = DungeonConfig::default();
        config.floors[0].enemies = CountRange { min: 5, max: 2 };
        let err = config.validate().expect_err("inverted range should be rejected");
        assert!(err.to_string().contains("min 5 > max 2"), "unexpected message: {err}");
    }

    #[test]
    fn rejects_room_sizes_that_cannot_fit_the_grid() {
        let mut config = DungeonConfig::default();
        config.grid_width = 6;
        config.room_size_min = (8, 4);
        config.room_size_max = (9, 9);
        let err = config.validate().expect_err("oversized rooms should be rejected");
        assert!(err.to_string().contains("exceeds grid bounds"), "unexpected message: {err}");
    }

    #[test]
    fn rejects_inverted_room_size_range() {
        let mut config = DungeonConfig::default();
        config.room_size_min = (9, 9);
        config.room_size_max = (4, 4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_pool_with_nonzero_count() {
        let mut config = DungeonConfig::default();
        config.floors[1].enemy_pool.clear();
        let err = config.validate().expect_err("empty enemy pool should be rejected");
        assert!(err.to_string().contains("floor 1"), "unexpected message: {err}");

        let mut config = DungeonConfig::default();
        config.floors[0].random_decorations.pool.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn allows_empty_pool_when_count_range_is_zero() {
        let mut config = DungeonConfig::default();
        config.floors[0].regular_decorations =
            DecorationPool { pool: Vec::new(), count: CountRange { min: 0, max: 0 } };
        config.validate().expect("zero-count empty pool is legal");
    }

    #[test]
    fn rejects_empty_floor_table() {
        let mut config = DungeonConfig::default();
        config.floors.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_grid() {
        let mut config = DungeonConfig::default();
        config.grid_height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_error_reports_json_problem() {
        let err = DungeonConfig::from_json("{not json").expect_err("bad JSON should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_io_problem() {
        let err = DungeonConfig::load(Path::new("/nonexistent/dungeon.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
