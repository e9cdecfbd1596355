//! Turns a `GameState` into what the board and status panels display.

use crate::model::{GameState, Tile};

/// Pixel width of one board column.
pub const CELL_PX: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Agent,
    Gold,
    Wumpus,
    Pit,
    Empty,
    Unknown,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Agent => "🤖",
            Glyph::Gold => "💰",
            Glyph::Wumpus => "👹",
            Glyph::Pit => "🕳️",
            Glyph::Empty => "",
            Glyph::Unknown => "❔",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Glyph::Agent => "Agent",
            Glyph::Gold => "Gold",
            Glyph::Wumpus => "Wumpus",
            Glyph::Pit => "Pit",
            Glyph::Empty => "Explored",
            Glyph::Unknown => "Unexplored",
        }
    }
}

/// Fog first (the agent's own tile is always shown), then agent > gold > wumpus > pit.
pub fn glyph_for(tile: &Tile) -> Glyph {
    if !tile.discovered && !tile.agent {
        Glyph::Unknown
    } else if tile.agent {
        Glyph::Agent
    } else if tile.gold {
        Glyph::Gold
    } else if tile.wumpus {
        Glyph::Wumpus
    } else if tile.pit {
        Glyph::Pit
    } else {
        Glyph::Empty
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub glyph: Glyph,
    pub safe: bool,
    pub visited: bool,
    pub agent: bool,
}

impl CellView {
    pub fn from_tile(row: usize, col: usize, tile: &Tile) -> Self {
        Self {
            row,
            col,
            glyph: glyph_for(tile),
            safe: tile.safe,
            visited: tile.visited,
            agent: tile.agent,
        }
    }

    pub fn coord_label(&self) -> String {
        format!("{},{}", self.row, self.col)
    }

    pub fn class_names(&self) -> Vec<&'static str> {
        let mut out = vec!["cell"];
        if self.safe {
            out.push("safe");
        }
        if self.visited {
            out.push("visited");
        }
        if self.agent {
            out.push("agent");
        }
        out
    }
}

/// Row-major cell list covering every tile of the board.
pub fn cells(state: &GameState) -> Vec<CellView> {
    state
        .tiles
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, t)| CellView::from_tile(i, j, t)))
        .collect()
}

pub fn grid_template(size: u32) -> String {
    format!("repeat({}, {}px)", size, CELL_PX)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusView {
    pub status: String,
    pub score: i64,
    pub arrow: &'static str,
    pub wumpus: &'static str,
    pub gold_carried: &'static str,
    /// `row,col` of the agent, or `-` when the board has none.
    pub position: String,
    pub game_over: bool,
}

impl StatusView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            status: state.status.clone(),
            score: state.score,
            arrow: yes_no(state.arrow_available),
            wumpus: yes_no(state.wumpus_alive),
            gold_carried: yes_no(state.has_gold),
            position: state
                .agent_position()
                .map(|(r, c)| format!("{},{}", r, c))
                .unwrap_or_else(|| "-".to_string()),
            game_over: state.game_over,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerceptView {
    pub breeze: &'static str,
    pub stench: &'static str,
    pub glitter: &'static str,
    pub scream: &'static str,
}

impl PerceptView {
    pub fn from_state(state: &GameState) -> Self {
        let p = state.percepts;
        Self {
            breeze: yes_no(p.breeze),
            stench: yes_no(p.stench),
            glitter: yes_no(p.glitter),
            scream: yes_no(p.scream),
        }
    }
}
