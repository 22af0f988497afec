/// Game configuration constants.
///
/// This module defines the board layout and the economy parameters such as
/// starting money, the pass-start bonus, and how prices and rents scale.
pub const BOARD_SIZE: usize = 40; // Number of slots on the board.

/// Every slot whose index is a multiple of this value is a free tile (never purchasable).
pub const FREE_TILE_INTERVAL: usize = 5;

/// Money each player starts with.
pub const STARTING_MONEY: i64 = 1500;

/// Money credited when a move wraps around past slot 0.
pub const PASS_START_BONUS: i64 = 200;

/// Minimum number of players required to create a game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players allowed in a game.
pub const MAX_PLAYERS: usize = 8;

/// Price of the space at slot `i` is `(i + 1) * PRICE_STEP`.
pub const PRICE_STEP: i64 = 100;

/// Rent of the space at slot `i` is `(i + 1) * RENT_STEP`.
pub const RENT_STEP: i64 = 50;

/// Number of faces on each of the two dice.
pub const DIE_FACES: u32 = 6;
