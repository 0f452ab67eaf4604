//! Level description.
//!
//! A [`Level`] lists everything [`crate::game::spawn_level`] needs to
//! populate a world: tile positions, player spawns, obstacle cells, and goal
//! regions. Levels are deserializable from JSON; [`Level::demo`] provides a
//! built-in level for the headless driver.

use glam::Vec3;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TileDef {
    pub x: f32,
    pub z: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    pub x: f32,
    pub z: f32,
    /// Parent frame origin of the player, world space.
    #[serde(default)]
    pub anchor: [f32; 3],
}

fn default_obstacle_tag() -> String {
    "Obstacle".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObstacleDef {
    pub x: f32,
    pub z: f32,
    #[serde(default = "default_obstacle_tag")]
    pub tag: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoalDef {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    pub name: String,
    #[serde(default)]
    pub tiles: Vec<TileDef>,
    #[serde(default)]
    pub players: Vec<PlayerDef>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDef>,
    #[serde(default)]
    pub goals: Vec<GoalDef>,
}

impl Level {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Level, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a level from a JSON file.
    pub fn load(path: &std::path::Path) -> Result<Level, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level file: {}", e))?;
        Level::from_json(&json).map_err(|e| format!("Failed to parse level file: {}", e))
    }

    /// Built-in level used by the headless driver.
    ///
    /// A 2x2 tile grid; one player starting at the origin; an obstacle
    /// blocking the negative diagonal; a goal one grid cell along the
    /// positive diagonal.
    pub fn demo() -> Level {
        Level {
            name: "demo".to_string(),
            tiles: vec![
                TileDef { x: 0.0, z: 0.0 },
                TileDef { x: 1.0, z: 0.0 },
                TileDef { x: 0.0, z: 1.0 },
                TileDef { x: 1.0, z: 1.0 },
            ],
            players: vec![PlayerDef {
                name: "Player".to_string(),
                x: 0.0,
                z: 0.0,
                anchor: [0.0, 0.0, 0.0],
            }],
            obstacles: vec![ObstacleDef {
                x: -0.5,
                z: -0.5,
                tag: default_obstacle_tag(),
            }],
            goals: vec![GoalDef {
                min: [0.75, -0.5, 0.75],
                max: [1.25, 0.5, 1.25],
            }],
        }
    }
}

impl PlayerDef {
    pub fn anchor_vec(&self) -> Vec3 {
        Vec3::from_array(self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_level_shape() {
        let level = Level::demo();
        assert_eq!(level.tiles.len(), 4);
        assert_eq!(level.players.len(), 1);
        assert_eq!(level.obstacles.len(), 1);
        assert_eq!(level.goals.len(), 1);
    }

    #[test]
    fn test_level_from_json() {
        let json = r#"{
            "name": "tiny",
            "tiles": [{"x": 0.0, "z": 0.0}],
            "players": [{"name": "P1", "x": 0.0, "z": 0.0}],
            "obstacles": [{"x": 0.5, "z": 0.5}],
            "goals": [{"min": [0.75, -0.5, 0.75], "max": [1.25, 0.5, 1.25]}]
        }"#;
        let level = Level::from_json(json).unwrap();
        assert_eq!(level.name, "tiny");
        assert_eq!(level.tiles.len(), 1);
        assert_eq!(level.players[0].anchor, [0.0, 0.0, 0.0]);
        assert_eq!(level.obstacles[0].tag, "Obstacle");
    }

    #[test]
    fn test_level_from_json_defaults_empty_sections() {
        let level = Level::from_json(r#"{"name": "empty"}"#).unwrap();
        assert!(level.tiles.is_empty());
        assert!(level.players.is_empty());
    }

    #[test]
    fn test_level_from_json_rejects_garbage() {
        assert!(Level::from_json("not json").is_err());
    }
}
