use serde::{Serialize, Deserialize};

use crate::game::state::Game;
use crate::game::types::{Player, PlayerId, Space};

/// Read-only copy of a game, detached from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub current_player: usize,
    pub players: Vec<Player>,
    pub board: Vec<Option<Space>>,
    pub game_over: bool,
    /// Set once the game is over.
    pub winner: Option<PlayerId>,
}

impl GameSnapshot {
    /// Name of the player owning the space at `position`, if any.
    pub fn owner_name(&self, position: usize) -> Option<&str> {
        let owner = self.board.get(position)?.as_ref()?.owner?;
        self.players.get(owner).map(|p| p.name.as_str())
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let game_over = game.is_game_over();
        GameSnapshot {
            current_player: game.current_index(),
            players: game.players().to_vec(),
            board: game.board().to_vec(),
            game_over,
            winner: if game_over { game.winner().ok().map(|p| p.id) } else { None },
        }
    }
}
