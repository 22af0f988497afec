//! Game engine root module.
//!
//! - `types`: spaces and players
//! - `board`: board generation
//! - `dice`: injected dice sources
//! - `state`: the `Game` engine and its turn rules
//! - `error`: the error kinds shared by the engine and the registry

pub mod types;
pub mod board;
pub mod dice;
pub mod error;
pub mod state;

#[cfg(test)]
mod tests;

pub use types::{Player, PlayerId, Space};
pub use board::Board;
pub use dice::{DiceSource, RandomDice, ScriptedDice};
pub use error::GameError;
pub use state::{Game, TurnOutcome};
