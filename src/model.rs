//! Wire types shared with the game server.
//! The server owns the game; these mirror the JSON it sends and accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Left => "←",
            Direction::Right => "→",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(default)]
    pub discovered: bool,
    /// Inferred safe by the server (no breeze/stench next to a visited tile).
    #[serde(default)]
    pub safe: bool,
    #[serde(default)]
    pub visited: bool,
    #[serde(default)]
    pub agent: bool,
    #[serde(default)]
    pub gold: bool,
    #[serde(default)]
    pub wumpus: bool,
    #[serde(default)]
    pub pit: bool,
    /// Row/column echoed by the server; layout uses the index in `tiles` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percepts {
    pub breeze: bool,
    pub stench: bool,
    pub glitter: bool,
    pub scream: bool,
    #[serde(default)]
    pub bump: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub size: u32,
    /// Row-major; `size` rows of `size` tiles.
    pub tiles: Vec<Vec<Tile>>,
    pub status: String,
    pub score: i64,
    pub arrow_available: bool,
    pub wumpus_alive: bool,
    pub percepts: Percepts,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub has_gold: bool,
    #[serde(default)]
    pub scream_heard: bool,
    /// Agent position as `[row, col]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<(u32, u32)>,
}

impl GameState {
    /// Checks the board shape the server promises: `size` rows of `size` tiles
    /// and at most one agent.
    pub fn validate(&self) -> Result<(), String> {
        let n = self.size as usize;
        if self.tiles.len() != n {
            return Err(format!("expected {} rows, got {}", n, self.tiles.len()));
        }
        if let Some((i, row)) = self.tiles.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(format!("row {} has {} tiles, expected {}", i, row.len(), n));
        }
        let agents = self.tiles.iter().flatten().filter(|t| t.agent).count();
        if agents > 1 {
            return Err(format!("{} tiles claim the agent", agents));
        }
        Ok(())
    }

    /// Agent position, preferring the tile flags over the echoed coordinate.
    pub fn agent_position(&self) -> Option<(usize, usize)> {
        for (i, row) in self.tiles.iter().enumerate() {
            if let Some(j) = row.iter().position(|t| t.agent) {
                return Some((i, j));
            }
        }
        self.agent.map(|(r, c)| (r as usize, c as usize))
    }
}

// ---------------- Request bodies -----------------

/// Size and pit count are forwarded as typed; unparsable input goes out as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NewGameRequest {
    pub size: Option<i64>,
    pub pits: Option<i64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DirectionRequest {
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AiToggleRequest {
    pub enabled: bool,
}

/// Serializes as `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmptyRequest {}
