use serde::{Serialize, Deserialize};

use crate::game::error::GameError;
use crate::game::types::PlayerId;
use super::types::GameId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGameRequest {
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameResponse {
    pub game_id: GameId,
}

/// One caller-level action on the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Roll, move, then pay any rent due on the landing space.
    Roll,
    Buy,
    NextTurn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failed(err: &GameError) -> Self {
        Self { success: false, message: err.to_string() }
    }
}

/// Event payload emitted by transactional callers after a successful action.
///
/// `player`, `position` and `money` describe the player who acted, after the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    pub game_id: GameId,
    pub action: GameAction,
    pub player: PlayerId,
    pub position: usize,
    pub money: i64,
    pub message: String,
}

impl From<GameEvent> for ActionResponse {
    fn from(event: GameEvent) -> Self {
        ActionResponse::ok(event.message)
    }
}
