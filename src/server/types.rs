use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::error::GameError;

/// Opaque identifier of a registered game (random v4 UUID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for GameId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(GameId)
            .map_err(|e| GameError::InvalidArgument(format!("invalid game id '{s}': {e}")))
    }
}
