//! Build-time client settings.

use crate::model::Direction;

pub const DEFAULT_SIZE: u32 = 4;
pub const DEFAULT_PITS: u32 = 3;
pub const DEFAULT_SHOOT_DIR: Direction = Direction::Right;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for `/api/*` paths; empty means same origin.
    pub api_base: String,
}

impl ClientConfig {
    /// Reads `WUMPUS_API_BASE` at compile time (Trunk passes the build env through).
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("WUMPUS_API_BASE"))
    }

    pub fn with_base(base: Option<&str>) -> Self {
        Self { api_base: base.map(str::trim).unwrap_or_default().to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_means_same_origin() {
        assert_eq!(ClientConfig::with_base(None).api_base, "");
        assert_eq!(ClientConfig::with_base(Some(" http://game:5000 ")).api_base, "http://game:5000");
    }
}
