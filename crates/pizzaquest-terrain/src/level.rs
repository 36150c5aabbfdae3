//! Level data: the JSON description of a level's terrain and starting
//! population.
//!
//! Sprite names are carried through for the renderer; the simulation
//! only reads dimensions, codes and classification sets.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pizzaquest_core::components::FireballStats;
use pizzaquest_core::constants::BACKGROUND_TERRAIN;
use pizzaquest_core::enums::{Direction, Intelligence};
use pizzaquest_core::types::GridPos;

use crate::error::LevelError;
use crate::grid::{Grid, TerrainCode};

/// A complete level description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    /// Terrain codes, row-major, `width * height` long.
    pub cells: Vec<TerrainCode>,
    /// Terrain code -> sprite asset. Code 0 is bare ground and needs none.
    #[serde(default)]
    pub sprites: BTreeMap<TerrainCode, String>,
    #[serde(default)]
    pub unwalkable: Vec<TerrainCode>,
    #[serde(default)]
    pub flammable: Vec<TerrainCode>,
    /// Code a flammable cell becomes after burning.
    #[serde(default)]
    pub burnt_code: Option<TerrainCode>,
    pub player: PlayerSpec,
    #[serde(default)]
    pub spawns: Vec<SpawnSpec>,
}

/// Where and how the player starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub x: i32,
    pub y: i32,
    #[serde(default = "default_player_name")]
    pub name: String,
    #[serde(default)]
    pub facing: Direction,
    pub health: i32,
    pub fireball: FireballStats,
}

fn default_player_name() -> String {
    "...what's your name, bub?...".to_string()
}

/// A non-player entity placed at level start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SpawnSpec {
    Door {
        x: i32,
        y: i32,
        description: String,
    },
    BarricadeDoor {
        x: i32,
        y: i32,
        description: String,
    },
    Pizza {
        x: i32,
        y: i32,
        description: String,
    },
    Vortex {
        x: i32,
        y: i32,
    },
    Decoration {
        x: i32,
        y: i32,
        name: String,
        description: String,
    },
    Rat {
        x: i32,
        y: i32,
        name: String,
        #[serde(default)]
        description: Option<String>,
    },
    Llama {
        x: i32,
        y: i32,
        #[serde(default)]
        facing: Direction,
        #[serde(default)]
        intelligence: Intelligence,
        health: i32,
    },
}

impl SpawnSpec {
    pub fn position(&self) -> GridPos {
        let (x, y) = match *self {
            SpawnSpec::Door { x, y, .. }
            | SpawnSpec::BarricadeDoor { x, y, .. }
            | SpawnSpec::Pizza { x, y, .. }
            | SpawnSpec::Vortex { x, y }
            | SpawnSpec::Decoration { x, y, .. }
            | SpawnSpec::Rat { x, y, .. }
            | SpawnSpec::Llama { x, y, .. } => (x, y),
        };
        GridPos::new(x, y)
    }

    /// Short name for error messages.
    pub fn what(&self) -> &'static str {
        match self {
            SpawnSpec::Door { .. } => "door",
            SpawnSpec::BarricadeDoor { .. } => "barricade door",
            SpawnSpec::Pizza { .. } => "pizza",
            SpawnSpec::Vortex { .. } => "vortex",
            SpawnSpec::Decoration { .. } => "decoration",
            SpawnSpec::Rat { .. } => "rat",
            SpawnSpec::Llama { .. } => "llama",
        }
    }
}

impl LevelData {
    /// Build the terrain grid for this level.
    pub fn grid(&self) -> Result<Grid, LevelError> {
        let grid = Grid::new(
            self.width,
            self.height,
            self.cells.clone(),
            self.unwalkable.iter().copied(),
            self.flammable.iter().copied(),
        )?;
        Ok(match self.burnt_code {
            Some(code) => grid.with_burnt_code(code),
            None => grid,
        })
    }

    /// Check everything that would otherwise blow up mid-game.
    pub fn validate(&self) -> Result<(), LevelError> {
        let grid = self.grid()?;

        if let Some((index, &code)) = self
            .cells
            .iter()
            .enumerate()
            .find(|(_, code)| **code != BACKGROUND_TERRAIN && !self.sprites.contains_key(*code))
        {
            return Err(LevelError::MissingSprite { code, index });
        }
        let burnt = grid.burnt_code();
        if burnt != BACKGROUND_TERRAIN && !self.sprites.contains_key(&burnt) {
            return Err(LevelError::MissingBurntSprite { code: burnt });
        }

        let player = GridPos::new(self.player.x, self.player.y);
        if !grid.contains(player) {
            return Err(LevelError::SpawnOutOfBounds {
                what: "player".to_string(),
                x: player.x,
                y: player.y,
            });
        }
        for spawn in &self.spawns {
            let pos = spawn.position();
            if !grid.contains(pos) {
                return Err(LevelError::SpawnOutOfBounds {
                    what: spawn.what().to_string(),
                    x: pos.x,
                    y: pos.y,
                });
            }
        }
        Ok(())
    }
}

/// Parse and validate a level from JSON text.
pub fn parse_level(json: &str) -> Result<LevelData, LevelError> {
    let level: LevelData = serde_json::from_str(json)?;
    level.validate()?;
    log::debug!(
        "level {} parsed: {}x{}, {} spawns",
        level.id,
        level.width,
        level.height,
        level.spawns.len()
    );
    Ok(level)
}

/// Load and validate a level from a JSON file.
pub fn load_level(path: &Path) -> Result<LevelData, LevelError> {
    let text = std::fs::read_to_string(path)?;
    parse_level(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL_JSON: &str = r#"{
        "id": 0,
        "width": 3,
        "height": 2,
        "cells": [0, 2, 0,
                  0, 0, 5],
        "sprites": { "2": "tree.gif", "5": "rock.gif" },
        "unwalkable": [2, 5],
        "flammable": [2],
        "player": {
            "x": 0, "y": 0, "facing": "Right", "health": 3,
            "fireball": { "range": 3, "speed": 10, "power": 0 }
        },
        "spawns": [
            { "kind": "Door", "x": 2, "y": 0, "description": "a dry door" },
            { "kind": "Llama", "x": 1, "y": 1, "facing": "Left",
              "intelligence": "Aggressive", "health": 3 }
        ]
    }"#;

    #[test]
    fn test_parse_valid_level() {
        let level = parse_level(LEVEL_JSON).unwrap();
        assert_eq!(level.spawns.len(), 2);
        assert_eq!(level.player.facing, Direction::Right);
        assert!(matches!(
            level.spawns[1],
            SpawnSpec::Llama {
                intelligence: Intelligence::Aggressive,
                ..
            }
        ));
        let grid = level.grid().unwrap();
        assert!(grid.is_flammable_at(GridPos::new(1, 0)));
        assert_eq!(grid.burnt_code(), 0);
    }

    #[test]
    fn test_missing_sprite_fails_fast() {
        let json = LEVEL_JSON.replace(r#""5": "rock.gif""#, r#""6": "rock.gif""#);
        let err = parse_level(&json).unwrap_err();
        assert!(
            matches!(err, LevelError::MissingSprite { code: 5, index: 5 }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_burnt_code_needs_a_sprite() {
        let json = LEVEL_JSON.replace(r#""flammable": [2],"#, r#""flammable": [2], "burnt_code": 9,"#);
        assert!(matches!(
            parse_level(&json),
            Err(LevelError::MissingBurntSprite { code: 9 })
        ));

        let json = LEVEL_JSON.replace(r#""flammable": [2],"#, r#""flammable": [2], "burnt_code": 5,"#);
        assert_eq!(parse_level(&json).unwrap().grid().unwrap().burnt_code(), 5);
    }

    #[test]
    fn test_dimension_mismatch_fails_fast() {
        let json = LEVEL_JSON.replace(r#""height": 2"#, r#""height": 3"#);
        assert!(matches!(
            parse_level(&json),
            Err(LevelError::DimensionMismatch {
                expected: 9,
                actual: 6
            })
        ));
    }

    #[test]
    fn test_spawn_out_of_bounds() {
        let json = LEVEL_JSON.replace(r#""x": 2, "y": 0"#, r#""x": 7, "y": 0"#);
        let err = parse_level(&json).unwrap_err();
        assert!(matches!(err, LevelError::SpawnOutOfBounds { x: 7, .. }));
        assert!(err.to_string().contains("door"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_level("{ nope"), Err(LevelError::Json(_))));
    }
}
