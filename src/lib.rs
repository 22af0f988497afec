//! Game-state engine for a simplified Monopoly-style board game.
//!
//! The crate holds the board and player model, the turn rules of a single game
//! (`game`), and the lock-guarded registry through which every caller reaches
//! a game (`server`). Front ends (request/response or transactional) call the
//! registry and serialize what it returns.

pub mod config;
pub mod game;
pub mod server;

pub use game::{DiceSource, Game, GameError, Player, PlayerId, RandomDice, ScriptedDice, Space};
pub use server::{ActionResponse, GameAction, GameEvent, GameId, GameRegistry, GameSnapshot};
