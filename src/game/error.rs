use std::fmt;

use crate::game::types::PlayerId;

/// Every way an engine or registry operation can be rejected.
///
/// All variants are deterministic rule violations: callers should report them,
/// never retry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed creation request (e.g. fewer than two player names).
    InvalidArgument(String),
    /// No game is registered under this identifier.
    NotFound(String),
    /// The game has no players.
    NoPlayers,
    /// The current player stands on a free tile.
    NotPurchasable { position: usize },
    /// The space under the current player already has an owner.
    AlreadyOwned { position: usize, owner: PlayerId },
    /// The current player cannot cover a price or a rent.
    InsufficientFunds { needed: i64, available: i64 },
}

impl GameError {
    /// Stable machine-readable code (e.g. "NOT_FOUND").
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NoPlayers => "NO_PLAYERS",
            Self::NotPurchasable { .. } => "NOT_PURCHASABLE",
            Self::AlreadyOwned { .. } => "ALREADY_OWNED",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
        }
    }

    /// HTTP-style status for request/response callers: 404 for unknown games, 400 otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            _ => 400,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
            Self::NotFound(game_id) => write!(f, "Game not found: {game_id}"),
            Self::NoPlayers => write!(f, "Game has no players"),
            Self::NotPurchasable { position } => {
                write!(f, "Position {position} has no purchasable property")
            }
            Self::AlreadyOwned { position, owner } => {
                write!(f, "Property at position {position} is already owned by player {owner}")
            }
            Self::InsufficientFunds { needed, available } => {
                write!(f, "Insufficient funds: needed {needed}, available {available}")
            }
        }
    }
}

impl std::error::Error for GameError {}
