use serde::{Serialize, Deserialize};
use log::debug;

use crate::config::game::{BOARD_SIZE, MAX_PLAYERS, MIN_PLAYERS, PASS_START_BONUS};
use crate::game::board::{generate_board, Board};
use crate::game::dice::{roll_pair, DiceSource};
use crate::game::error::GameError;
use crate::game::types::{Player, PlayerId, Space};

/// One game instance: the board, the players, and whose turn it is.
///
/// Every mutating operation targets the current player and validates before it
/// mutates, so a rejected operation leaves the game untouched. The only way to
/// build one is `Game::new`; callers that need a wire form use `GameSnapshot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
}

/// What a full roll (move plus automatic rent) did to the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub steps: u32,
    pub position: usize,
    pub passed_start: bool,
    pub rent_paid: i64,
}

impl Game {
    /// Create a new game with one player per name, in order.
    pub fn new<S: AsRef<str>>(player_names: &[S]) -> Result<Self, GameError> {
        if player_names.len() < MIN_PLAYERS {
            return Err(GameError::InvalidArgument(format!(
                "at least {MIN_PLAYERS} players are required, got {}",
                player_names.len()
            )));
        }
        if player_names.len() > MAX_PLAYERS {
            return Err(GameError::InvalidArgument(format!(
                "at most {MAX_PLAYERS} players are allowed, got {}",
                player_names.len()
            )));
        }
        if let Some(index) = player_names.iter().position(|n| n.as_ref().trim().is_empty()) {
            return Err(GameError::InvalidArgument(format!("player name {index} is blank")));
        }

        let players = player_names
            .iter()
            .enumerate()
            .map(|(id, name)| Player::new(id, name.as_ref().to_string()))
            .collect();

        Ok(Game {
            board: generate_board(),
            players,
            current: 0,
        })
    }

    pub fn board(&self) -> &[Option<Space>] {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> Result<&Player, GameError> {
        self.players.get(self.current).ok_or(GameError::NoPlayers)
    }

    /// The space at `position`, or `None` for free tiles and off-board positions.
    pub fn space(&self, position: usize) -> Option<&Space> {
        self.board.get(position).and_then(Option::as_ref)
    }

    pub fn owner_of(&self, position: usize) -> Option<&Player> {
        self.space(position)
            .and_then(|space| space.owner)
            .and_then(|owner| self.players.get(owner))
    }

    /// Sum of two dice. Only consumes the dice source.
    pub fn roll_dice(&self, dice: &mut dyn DiceSource) -> u32 {
        roll_pair(dice)
    }

    /// Roll the dice and move the current player. Returns the number of steps.
    pub fn move_current_player(&mut self, dice: &mut dyn DiceSource) -> Result<u32, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let steps = self.roll_dice(dice);
        self.move_current_player_by(steps)?;
        Ok(steps)
    }

    /// Move the current player `steps` slots forward. Returns the new position.
    ///
    /// Wrapping past slot 0 credits `PASS_START_BONUS`; the check compares the
    /// post-move position against `steps`.
    pub fn move_current_player_by(&mut self, steps: u32) -> Result<usize, GameError> {
        let player = self.players.get_mut(self.current).ok_or(GameError::NoPlayers)?;
        let steps = steps as usize;

        player.position = (player.position + steps) % BOARD_SIZE;
        if player.position < steps {
            player.money += PASS_START_BONUS;
        }

        debug!(
            "[Game] Player moved: player={} steps={} position={} money={}",
            player.id, steps, player.position, player.money
        );
        Ok(player.position)
    }

    /// Current player buys the space they stand on.
    pub fn buy_property(&mut self) -> Result<(), GameError> {
        let player = self.players.get_mut(self.current).ok_or(GameError::NoPlayers)?;
        let position = player.position;
        let space = self
            .board
            .get_mut(position)
            .and_then(Option::as_mut)
            .ok_or(GameError::NotPurchasable { position })?;

        if let Some(owner) = space.owner {
            return Err(GameError::AlreadyOwned { position, owner });
        }
        if player.money < space.price {
            return Err(GameError::InsufficientFunds {
                needed: space.price,
                available: player.money,
            });
        }

        player.money -= space.price;
        space.owner = Some(player.id);
        player.properties.push(position);

        debug!(
            "[Game] Property bought: player={} position={} price={}",
            player.id, position, space.price
        );
        Ok(())
    }

    /// Current player pays rent for the space they stand on. Returns the amount paid.
    ///
    /// Free tiles, unowned spaces and the player's own spaces cost nothing,
    /// and so does a space whose owner is not a player of this game.
    pub fn pay_rent(&mut self) -> Result<i64, GameError> {
        let current = self.current;
        let payer = self.players.get(current).ok_or(GameError::NoPlayers)?;
        let Some(space) = self.space(payer.position).filter(|space| space.is_owned()) else {
            return Ok(0);
        };
        let owner = match space.owner {
            Some(owner) if owner != payer.id && owner < self.players.len() => owner,
            _ => return Ok(0),
        };
        if payer.money < space.rent {
            return Err(GameError::InsufficientFunds {
                needed: space.rent,
                available: payer.money,
            });
        }

        let rent = space.rent;
        let Some(landlord) = self.players.get_mut(owner) else {
            return Ok(0);
        };
        landlord.money += rent;
        if let Some(payer) = self.players.get_mut(current) {
            payer.money -= rent;
        }

        debug!(
            "[Game] Rent paid: payer={} owner={} rent={}",
            current, owner, rent
        );
        Ok(rent)
    }

    /// Roll, move, then settle rent on the landing space.
    ///
    /// If the rent cannot be paid the move is undone, so the turn either
    /// happens in full or not at all. The dice are consumed either way.
    pub fn roll_and_settle(&mut self, dice: &mut dyn DiceSource) -> Result<TurnOutcome, GameError> {
        let before = self.current_player()?.clone();

        let steps = self.move_current_player(dice)?;
        let rent_paid = match self.pay_rent() {
            Ok(rent) => rent,
            Err(err) => {
                self.players[self.current] = before;
                return Err(err);
            }
        };

        let player = &self.players[self.current];
        Ok(TurnOutcome {
            steps,
            position: player.position,
            passed_start: player.position < steps as usize,
            rent_paid,
        })
    }

    /// Pass the turn to the next player, wrapping around.
    pub fn next_player(&mut self) -> Result<PlayerId, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        self.current = (self.current + 1) % self.players.len();
        Ok(self.current)
    }

    pub fn is_game_over(&self) -> bool {
        self.players.iter().any(|p| p.money < 0)
    }

    /// Richest player; on a tie the earliest player in turn order wins.
    pub fn winner(&self) -> Result<&Player, GameError> {
        let (first, rest) = self.players.split_first().ok_or(GameError::NoPlayers)?;
        Ok(rest
            .iter()
            .fold(first, |best, player| if player.money > best.money { player } else { best }))
    }
}
