// src/server/registry.rs

//! Game registry.
//!
//! Owns every live game and the shared dice source behind a single
//! process-wide `RwLock`. Mutations hold the write lock for the whole
//! "look up, then mutate" sequence and commit only on success; snapshots
//! take the read lock.
//! No other component keeps a reference to a `Game` across calls.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};

use crate::game::dice::{DiceSource, RandomDice};
use crate::game::error::GameError;
use crate::game::state::Game;
use super::messages::{ActionResponse, GameAction, GameEvent};
use super::snapshot::GameSnapshot;
use super::types::GameId;

struct RegistryState {
    games: HashMap<GameId, Game>,
    dice: Box<dyn DiceSource>,
}

pub struct GameRegistry {
    state: RwLock<RegistryState>,
}

impl GameRegistry {
    /// Registry rolling OS-seeded dice.
    pub fn new() -> Self {
        Self::with_dice(RandomDice::new())
    }

    /// Registry whose rolls are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(RandomDice::seeded(seed))
    }

    pub fn with_dice(dice: impl DiceSource + 'static) -> Self {
        Self {
            state: RwLock::new(RegistryState {
                games: HashMap::new(),
                dice: Box::new(dice),
            }),
        }
    }

    // Stored games are only replaced after an operation returns Ok (see
    // `with_game`), so a panic under the lock leaves the map consistent.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create and register a new game. Returns its identifier.
    pub fn create_game<S: AsRef<str>>(&self, player_names: &[S]) -> Result<GameId, GameError> {
        let game = Game::new(player_names).inspect_err(|e| {
            warn!("[GameRegistry] Rejected game creation: {}", e);
        })?;

        let mut state = self.write();
        let mut game_id = GameId::new();
        while state.games.contains_key(&game_id) {
            game_id = GameId::new();
        }
        state.games.insert(game_id, game);

        info!(
            "[GameRegistry] Game created: game_id={} players={} live_games={}",
            game_id,
            player_names.len(),
            state.games.len()
        );
        Ok(game_id)
    }

    pub fn get_game_state(&self, game_id: &GameId) -> Result<GameSnapshot, GameError> {
        let state = self.read();
        state
            .games
            .get(game_id)
            .map(GameSnapshot::from)
            .ok_or_else(|| not_found(game_id))
    }

    /// Run `op` against the stored game under the write lock.
    ///
    /// The closure works on a copy of the game and receives the registry's dice
    /// source. The copy replaces the stored game only if the closure returns
    /// `Ok`; an `Err` or a panic leaves the stored game as it was. The result,
    /// error included, is returned unchanged.
    pub fn with_game<T, F>(&self, game_id: &GameId, op: F) -> Result<T, GameError>
    where
        F: FnOnce(&mut Game, &mut dyn DiceSource) -> Result<T, GameError>,
    {
        let mut guard = self.write();
        let RegistryState { games, dice } = &mut *guard;
        let stored = games.get_mut(game_id).ok_or_else(|| not_found(game_id))?;

        let mut working = stored.clone();
        let value = op(&mut working, dice.as_mut())?;
        *stored = working;
        Ok(value)
    }

    /// Apply one caller-level action and describe it as an event.
    pub fn apply_with_event(&self, game_id: &GameId, action: GameAction) -> Result<GameEvent, GameError> {
        let result = self.with_game(game_id, |game, dice| {
            let actor = game.current_index();
            let message = match action {
                GameAction::Roll => {
                    let outcome = game.roll_and_settle(dice)?;
                    if outcome.rent_paid > 0 {
                        format!(
                            "Moved {} steps to position {} and paid {} rent",
                            outcome.steps, outcome.position, outcome.rent_paid
                        )
                    } else {
                        format!("Moved {} steps to position {}", outcome.steps, outcome.position)
                    }
                }
                GameAction::Buy => {
                    game.buy_property()?;
                    "Purchase successful".to_string()
                }
                GameAction::NextTurn => {
                    let next = game.next_player()?;
                    format!("Turn ended, player {} is up", next)
                }
            };

            let player = &game.players()[actor];
            Ok(GameEvent {
                game_id: *game_id,
                action,
                player: player.id,
                position: player.position,
                money: player.money,
                message,
            })
        });

        match &result {
            Ok(event) => debug!(
                "[GameRegistry] Action applied: game_id={} action={:?} player={} position={} money={}",
                game_id, action, event.player, event.position, event.money
            ),
            Err(e) => warn!(
                "[GameRegistry] Action rejected: game_id={} action={:?} error={}",
                game_id, action, e
            ),
        }
        result
    }

    pub fn apply(&self, game_id: &GameId, action: GameAction) -> Result<ActionResponse, GameError> {
        self.apply_with_event(game_id, action).map(ActionResponse::from)
    }

    /// Drop a game, e.g. once an external expiry policy decides it is finished.
    pub fn remove_game(&self, game_id: &GameId) -> Result<(), GameError> {
        let mut state = self.write();
        state.games.remove(game_id).ok_or_else(|| not_found(game_id))?;
        info!(
            "[GameRegistry] Game removed: game_id={} live_games={}",
            game_id,
            state.games.len()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().games.is_empty()
    }

    pub fn game_ids(&self) -> Vec<GameId> {
        self.read().games.keys().copied().collect()
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(game_id: &GameId) -> GameError {
    GameError::NotFound(game_id.to_string())
}
